//! JSON-RPC over HTTP client for Kamailio.
//!
//! This crate provides:
//!
//! - [`JsonRpcClient`] - Generic call path with request correlation
//! - [`ClientConfig`] - Endpoint, TLS and timeout settings
//! - Typed wrappers for `core.echo`, `uac.*`, `domain.reload` and `ul.*`
//! - [`RpcError`] - Error types for every failure a call can report
//!
//! # Example
//!
//! ```ignore
//! use kamrpc_client::JsonRpcClient;
//!
//! let client = JsonRpcClient::new("https://sip.example.com:5061/RPC", true)?;
//! let echoed = client.core_echo(["ping"]).await?;
//! let dump = client.ul_dump(Vec::<String>::new()).await?;
//! for contact in dump.contacts() {
//!     println!("{}", contact.address);
//! }
//! ```

mod client;
mod config;
mod error;
mod methods;

#[cfg(test)]
mod stub_server;

pub use client::{JsonRpcClient, validate_response};
pub use config::ClientConfig;
pub use error::{RpcError, RpcResult};
pub use methods::method;

// Re-export protocol types used in the public API.
pub use kamrpc_protocol::{
    AorLookup, OK, Params, RawResult, RegistrationInfo, Response, RpcErrorObject, UlDump,
};
