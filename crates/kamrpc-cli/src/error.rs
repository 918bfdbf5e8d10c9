//! CLI error types.

use kamrpc_client::RpcError;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The remote call failed.
    #[error("{0}")]
    Rpc(#[from] RpcError),

    /// Invalid command-line input.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Result could not be rendered.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
