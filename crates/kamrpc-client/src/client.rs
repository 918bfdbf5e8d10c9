//! HTTP client for JSON-RPC calls.
//!
//! This module provides the generic call path shared by every wrapper:
//! - request identifier allocation
//! - envelope encoding and the HTTP POST exchange
//! - response validation (protocol error, HTTP status, identifier echo)

use std::sync::{Mutex, PoisonError};

use kamrpc_protocol::{Params, RawResult, Request, Response, decode_response, encode_request};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::{RpcError, RpcResult};

/// JSON-RPC client bound to one Kamailio endpoint.
///
/// The client is `Send + Sync`; share it by reference or behind an `Arc`.
/// Every call gets a distinct identifier, allocated from a counter that
/// starts at zero.
pub struct JsonRpcClient {
    /// The underlying HTTP client.
    client: Client,
    /// Configuration.
    config: ClientConfig,
    /// Identifier for the next call.
    next_id: Mutex<u64>,
}

impl JsonRpcClient {
    /// Creates a client for `endpoint`.
    ///
    /// No connection is made here. When `skip_tls_verify` is true,
    /// certificate validation is disabled for every call.
    pub fn new(endpoint: &str, skip_tls_verify: bool) -> RpcResult<Self> {
        let config = ClientConfig::new(endpoint)
            .map_err(|e| RpcError::construction(format!("invalid endpoint {endpoint:?}: {e}")))?
            .with_skip_tls_verify(skip_tls_verify);

        Self::with_config(config)
    }

    /// Creates a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> RpcResult<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| RpcError::construction(format!("failed to create HTTP client: {}", e)))?;

        debug!(
            endpoint = %config.url,
            verify_tls = config.verify_tls,
            "JSON-RPC client configured"
        );

        Ok(Self {
            client,
            config,
            next_id: Mutex::new(0),
        })
    }

    /// Calls `method` and returns its undecoded result.
    ///
    /// A list of strings is sent as one positional parameter per element;
    /// any other value is sent as the only parameter.
    ///
    /// # Errors
    ///
    /// - [`RpcError::Transport`] if the request cannot be encoded or the HTTP
    ///   exchange fails
    /// - [`RpcError::Decode`] if the body is not a response envelope
    /// - [`RpcError::Protocol`], [`RpcError::UnexpectedStatus`] or
    ///   [`RpcError::Unsynchronized`], checked in that order
    pub async fn call(&self, method: &str, params: impl Into<Params>) -> RpcResult<RawResult> {
        let id = self.allocate_id();
        let request = Request::new(id, method, params);
        let body = encode_request(&request)?;

        trace!(method = %method, id, url = %self.config.url, "Sending request");

        let response = self
            .client
            .post(self.config.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RpcError::transport(format!("request to {} failed", self.config.url), e))?;

        let status = response.status();
        trace!(status = %status, id, "Received response");

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RpcError::transport("failed to read response body", e))?;

        let envelope = decode_response(&bytes)?;
        validate_response(envelope, status.as_u16(), id)
    }

    /// Takes the next identifier. The lock covers only the increment.
    fn allocate_id(&self) -> u64 {
        let mut next = self.next_id.lock().unwrap_or_else(PoisonError::into_inner);
        let id = *next;
        *next += 1;
        id
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &str {
        self.config.url_str()
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Checks a decoded response against the HTTP status and the identifier sent.
///
/// An error object wins over the status code, which wins over an identifier
/// mismatch.
pub fn validate_response(response: Response, status: u16, sent_id: u64) -> RpcResult<RawResult> {
    if !response.is_compatible() {
        debug!(jsonrpc = %response.jsonrpc, id = sent_id, "Unexpected protocol version tag");
    }

    if let Some(error) = response.error {
        debug!(code = error.code, message = %error.message, id = sent_id, "Server reported error");
        return Err(RpcError::Protocol {
            code: error.code,
            message: error.message,
        });
    }

    if status > 299 {
        return Err(RpcError::UnexpectedStatus { status });
    }

    if response.id != sent_id {
        warn!(
            expected = sent_id,
            received = response.id,
            "response id mismatch"
        );
        return Err(RpcError::Unsynchronized {
            sent: sent_id,
            received: response.id,
        });
    }

    Ok(response.result)
}
