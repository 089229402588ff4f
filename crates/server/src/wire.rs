//! Request and response payloads.
//!
//! Entries themselves serialize as [`cubby_core::Entry`]; this module only
//! holds the request shapes and the error body.

use serde::{Deserialize, Serialize};

/// Body of `PUT /` (create) and `POST /` (update).
///
/// `main_key` is optional at the serde level so that a body without the
/// field is reported as an invalid key rather than as a deserialization
/// failure; a missing `value` is treated as empty.
#[derive(Debug, Deserialize)]
pub struct UpsertRequest {
    /// The key to create or update.
    pub main_key: Option<String>,
    /// The value to store. Missing means empty.
    #[serde(default)]
    pub value: String,
}

impl UpsertRequest {
    /// The key named by the request, with a missing field reading as empty
    /// (and therefore invalid once it reaches the store).
    pub fn key(&self) -> &str {
        self.main_key.as_deref().unwrap_or_default()
    }
}

/// Body of `DELETE /`.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    /// The key to remove.
    pub main_key: Option<String>,
}

impl DeleteRequest {
    /// The key named by the request; missing reads as empty.
    pub fn key(&self) -> &str {
        self.main_key.as_deref().unwrap_or_default()
    }
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,
}

/// Body of `GET /healthz`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
}
