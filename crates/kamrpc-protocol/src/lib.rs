//! JSON-RPC envelopes and Kamailio record types for kamrpc.
//!
//! This crate defines the wire format spoken by Kamailio's `jsonrpcs` module
//! over HTTP, plus the record shapes returned by the management methods the
//! client wraps.
//!
//! # Envelope Structure
//!
//! Every call is a [`Request`] envelope posted as `application/json`:
//! - `jsonrpc`: Always "2.0"
//! - `method`: Remote method name (e.g. `core.echo`)
//! - `params`: Positional parameters, see [`Params`]
//! - `id`: Per-client request identifier used for correlation
//!
//! The server answers with a [`Response`] carrying either a `result`, kept
//! undecoded as a [`RawResult`], or an [`RpcErrorObject`].
//!
//! # Example
//!
//! ```rust
//! use kamrpc_protocol::{Request, Response, encode_request, decode_response};
//!
//! let request = Request::new(7, "core.echo", vec!["ping".to_string()]);
//! let bytes = encode_request(&request).unwrap();
//! assert!(bytes.starts_with(br#"{"jsonrpc":"2.0""#));
//!
//! let response = decode_response(br#"{"jsonrpc":"2.0","id":7,"result":["ping"]}"#).unwrap();
//! let echoed: Vec<String> = response.result.decode().unwrap();
//! assert_eq!(echoed, vec!["ping"]);
//! ```

mod codec;
mod error;
mod records;
mod types;

pub use codec::{decode_response, encode_request};
pub use error::{ProtocolError, ProtocolResult};
pub use records::{
    AorEntry, AorInfo, AorLookup, Contact, ContactEntry, DomainEntry, DomainInfo, DomainStats,
    RegistrationInfo, UlDump,
};
pub use types::{Params, RawResult, Request, Response, RpcErrorObject};

/// JSON-RPC protocol version tag.
pub const JSONRPC_VERSION: &str = "2.0";

/// Marker reported by commands whose result carries no payload.
pub const OK: &str = "OK";
