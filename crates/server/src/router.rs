//! Router assembly.

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the service router.
///
/// The whole keyed resource lives at `/`:
/// - `PUT /` - create
/// - `POST /` - update
/// - `GET /` - list all entries
/// - `DELETE /` - delete
///
/// plus `GET /healthz` for liveness.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_entries)
                .put(handlers::create_entry)
                .post(handlers::update_entry)
                .delete(handlers::delete_entry),
        )
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
