//! Client configuration.

use std::time::Duration;
use url::Url;

/// Configuration for [`JsonRpcClient`](crate::JsonRpcClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// JSON-RPC endpoint, e.g. `http://127.0.0.1:5060/RPC`.
    pub url: Url,

    /// Whether to verify TLS certificates.
    pub verify_tls: bool,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl ClientConfig {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Creates a new configuration for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(url: impl AsRef<str>) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(url.as_ref())?;
        Ok(Self {
            url: parsed,
            verify_tls: true,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("kamrpc/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Sets TLS verification from a "skip" flag, for self-signed or internal
    /// deployments.
    pub fn with_skip_tls_verify(mut self, skip: bool) -> Self {
        self.verify_tls = !skip;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the endpoint as a string.
    pub fn url_str(&self) -> &str {
        self.url.as_str()
    }
}
