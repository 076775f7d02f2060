//! Error types for the Instacart client.
//!
//! Each variant names the stage that failed so the message can be shown to the
//! user as-is. Remote JSON-RPC failures keep the code and message they came with.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// A required field is missing or a collection is empty.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("encode rpc payload")]
    Serialization(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("decode response")]
    Decode(#[source] serde_json::Error),

    /// The endpoint answered with a JSON-RPC `error` object.
    #[error("rpc error ({code}): {message}")]
    Rpc { code: i64, message: String },
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("instacart returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("send request")]
    Network(#[source] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("request cancelled")]
    Cancelled,
}

impl ClientError {
    /// HTTP status for a non-2xx reply, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}
