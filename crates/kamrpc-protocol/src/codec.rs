//! JSON encoding of request envelopes and decoding of response envelopes.
//!
//! Only the envelope shape is recognized here. The `result` member is kept
//! as raw JSON text and decoded later by whoever knows its type.

use crate::error::{ProtocolError, ProtocolResult};
use crate::types::{Request, Response};

/// Encodes a request envelope to a JSON body.
///
/// # Example
///
/// ```rust
/// use kamrpc_protocol::{encode_request, Request};
///
/// let request = Request::new(0, "domain.reload", Vec::<String>::new());
/// let bytes = encode_request(&request).unwrap();
/// assert_eq!(bytes, br#"{"jsonrpc":"2.0","method":"domain.reload","params":[],"id":0}"#);
/// ```
pub fn encode_request(request: &Request) -> ProtocolResult<Vec<u8>> {
    serde_json::to_vec(request).map_err(ProtocolError::Encode)
}

/// Decodes a response envelope from a JSON body.
///
/// Whitespace-only bodies are reported as [`ProtocolError::EmptyMessage`].
pub fn decode_response(data: &[u8]) -> ProtocolResult<Response> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Err(ProtocolError::EmptyMessage);
    }

    serde_json::from_slice(data).map_err(ProtocolError::Decode)
}
