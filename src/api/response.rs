//! # Response Envelope
//!
//! Uniform success shape for every endpoint: `{ message, data }`.
//! Creates answer 201, everything else 200.

use serde::Serialize;

/// Success envelope wrapping a record or record list
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}
