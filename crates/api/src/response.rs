//! Response payloads that are not database rows.

use serde::Serialize;

/// `{ "message": "..." }`, returned by successful deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
