//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope except the roster
//! auto-save/submit endpoints, whose wire shape is fixed by the client
//! contract (see `handlers::roster`).

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
