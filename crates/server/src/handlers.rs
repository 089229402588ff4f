//! HTTP handlers for the keyed resource at `/`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::debug;

use cubby_core::Entry;

use crate::error::ApiResult;
use crate::state::AppState;
use crate::wire::{DeleteRequest, HealthResponse, UpsertRequest};

/// `PUT /` - create a new key-value pair.
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<UpsertRequest>, JsonRejection>,
) -> ApiResult<Json<Entry>> {
    let Json(req) = payload?;
    let entry = state.store.create(req.key(), &req.value)?;
    Ok(Json(entry))
}

/// `POST /` - update an existing key-value pair.
pub async fn update_entry(
    State(state): State<AppState>,
    payload: Result<Json<UpsertRequest>, JsonRejection>,
) -> ApiResult<Json<Entry>> {
    let Json(req) = payload?;
    let entry = state.store.update(req.key(), &req.value)?;
    Ok(Json(entry))
}

/// `GET /` - list all entries.
pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<Entry>> {
    let entries = state.store.entries();
    debug!(count = entries.len(), "listing entries");
    Json(entries)
}

/// `DELETE /` - remove a key-value pair, returning the removed entry.
pub async fn delete_entry(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> ApiResult<Json<Entry>> {
    let Json(req) = payload?;
    let entry = state.store.delete(req.key())?;
    Ok(Json(entry))
}

/// `GET /healthz` - liveness probe.
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
