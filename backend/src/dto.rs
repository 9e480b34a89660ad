//! # Journal API — Response envelopes
//!
//! Entry payloads are serialized straight from [`crate::models::journal_entry`];
//! the shapes here cover everything that is not an entry.

use serde::Serialize;

/// Standard success message response
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

/// Error envelope — every non-2xx response from the journal routes uses this shape
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
