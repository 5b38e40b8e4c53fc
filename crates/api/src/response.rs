//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` envelope returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
