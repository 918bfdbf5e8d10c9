//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/kamrpc/config.toml` by default:
//!
//! ```toml
//! [server]
//! endpoint = "https://sip.example.com:5061/RPC"
//! skip_tls_verify = true
//! timeout = 10
//! ```
//!
//! Command-line flags take precedence over the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use kamrpc_client::ClientConfig;
use serde::{Deserialize, Serialize};

/// Configuration for kamctl.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Debug mode.
    pub debug: bool,

    /// Server/connection settings.
    #[serde(default)]
    pub server: ServerSettings,
}

/// Server/connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// JSON-RPC endpoint URL.
    pub endpoint: Option<String>,

    /// Skip TLS certificate verification.
    pub skip_tls_verify: bool,

    /// Request timeout in seconds.
    pub timeout: u64,

    /// User agent override.
    pub user_agent: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            skip_tls_verify: false,
            timeout: ClientConfig::DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ServerSettings {
    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        endpoint: Option<&str>,
        insecure: bool,
        timeout: Option<u64>,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.to_string());
        }
        self.skip_tls_verify |= insecure;
        if let Some(timeout) = timeout {
            self.timeout = timeout;
        }
        self
    }

    /// Converts to client configuration.
    pub fn to_client_config(&self) -> Result<ClientConfig, String> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            "no endpoint configured; pass --endpoint or set [server] endpoint".to_string()
        })?;

        if self.timeout == 0 {
            return Err("timeout must be greater than zero".to_string());
        }

        let mut config = ClientConfig::new(endpoint)
            .map_err(|e| format!("invalid endpoint {:?}: {}", endpoint, e))?
            .with_skip_tls_verify(self.skip_tls_verify)
            .with_timeout(Duration::from_secs(self.timeout));

        if let Some(ref user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }

        Ok(config)
    }
}

impl CliConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kamrpc")
    }
}
