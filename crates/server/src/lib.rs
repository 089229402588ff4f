//! HTTP adapter for the Cubby key-value store.
//!
//! A thin boundary layer: decode requests into store operations, encode
//! results and errors into status codes and JSON bodies. All of the CRUD and
//! quota logic lives in `cubby-store`; this crate only routes and translates.
//!
//! ## Routes
//!
//! | Method   | Path       | Operation                  |
//! |----------|------------|----------------------------|
//! | `PUT`    | `/`        | create `{main_key, value}` |
//! | `POST`   | `/`        | update `{main_key, value}` |
//! | `GET`    | `/`        | list all entries           |
//! | `DELETE` | `/`        | delete `{main_key}`        |
//! | `GET`    | `/healthz` | liveness probe             |
//!
//! Success is always `200` with a JSON body; any invalid request (bad key,
//! duplicate, quota, unknown key, malformed body) is `400` with
//! `{"error": "..."}`.

#![warn(missing_docs)]

mod error;
mod handlers;
mod router;
mod server;
mod state;
mod wire;

pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use server::Server;
pub use state::AppState;
pub use wire::{DeleteRequest, ErrorResponse, UpsertRequest};
