//! Shared DTO types used across multiple endpoints.

use serde::Serialize;

/// Uniform acknowledgement envelope.
///
/// All relay routes respond with this shape: a static `message` naming
/// the acknowledged action and, where a body was parsed, the validated
/// request echoed back in `data`.
#[derive(Debug, Serialize)]
pub struct Ack<T: Serialize> {
    /// Static string naming the acknowledged action.
    pub message: String,
    /// Echo of the validated request body, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Ack<T> {
    /// Acknowledgement carrying the validated request back to the caller.
    #[must_use]
    pub fn with_data(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl Ack<()> {
    /// Acknowledgement with no echoed body.
    #[must_use]
    pub fn message_only(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
        }
    }
}
