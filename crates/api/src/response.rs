//! Shared response envelope types for API handlers.
//!
//! Successful reads use a `{ "data": ... }` envelope; creations answer
//! `201 Created` with `{ "id": ..., "path": ... }`.

use cinema_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body of a `201 Created` response: the new id and its canonical URL.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub path: String,
}

impl CreatedResponse {
    pub fn new(id: DbId, path: String) -> Self {
        Self { id, path }
    }
}
