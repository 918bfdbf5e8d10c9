//! Protocol error types.

use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while encoding or decoding envelopes.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a request envelope to JSON.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Response body is not a well-formed envelope.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Response body was empty.
    #[error("empty message")]
    EmptyMessage,
}
