//! Client error types.

use kamrpc_protocol::ProtocolError;
use thiserror::Error;

/// Result type for client operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Errors that can occur while calling a remote method.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The client could not be configured.
    #[error("failed to construct client: {message}")]
    Construction { message: String },

    /// Network, TLS or IO failure, or a failure to encode the request.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed or schema-mismatched payload.
    #[error("decode error: {0}")]
    Decode(#[source] ProtocolError),

    /// The server reported a remote procedure failure.
    #[error("{message}")]
    Protocol { code: i64, message: String },

    /// HTTP status outside 200-299 without an explicit protocol error.
    #[error("unexpected status code received: {status}")]
    UnexpectedStatus { status: u16 },

    /// The echoed request identifier does not match the one sent.
    #[error("unsynchronized request, had: {sent}, received: {received}")]
    Unsynchronized { sent: u64, received: u64 },
}

impl RpcError {
    /// Creates a construction error.
    pub fn construction(message: impl Into<String>) -> Self {
        Self::Construction {
            message: message.into(),
        }
    }

    /// Creates a transport error with its underlying cause.
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a decode error from a failed result decode.
    pub fn decode(err: serde_json::Error) -> Self {
        Self::Decode(ProtocolError::Decode(err))
    }

    /// Returns true if the server itself signalled the failure.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, Self::Protocol { .. } | Self::UnexpectedStatus { .. })
    }
}

impl From<ProtocolError> for RpcError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::Encode(source) => Self::transport("failed to encode request", source),
            other => Self::Decode(other),
        }
    }
}
