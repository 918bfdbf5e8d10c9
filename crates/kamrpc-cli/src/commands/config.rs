//! Configuration commands.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &CliConfig) -> CliResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| CliError::config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", CliConfig::default_path().display());
    println!("{}", toml_str);

    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &CliConfig) -> CliResult<()> {
    let client_config = config.server.to_client_config().map_err(CliError::Config)?;

    if !client_config.verify_tls {
        println!("Warning: TLS certificate verification is disabled.");
    }

    println!("Endpoint: {}", client_config.url_str());
    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> CliResult<()> {
    let config_path = CliConfig::default_path();
    println!("config: {}", config_path.display());
    Ok(())
}
