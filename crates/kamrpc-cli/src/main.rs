//! kamctl CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use kamrpc_cli::cli::{Cli, Command, ConfigAction};
use kamrpc_cli::commands;
use kamrpc_cli::config::CliConfig;
use kamrpc_cli::error::{CliError, CliResult};
use kamrpc_client::JsonRpcClient;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing
    let filter = if cli.debug || config.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Run the command
    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> CliResult<CliConfig> {
    if let Some(ref path) = cli.config {
        CliConfig::load_from(path).map_err(CliError::Config)
    } else {
        CliConfig::load().map_err(CliError::Config)
    }
}

async fn run(cli: Cli, config: CliConfig) -> CliResult<()> {
    let Cli {
        endpoint,
        insecure,
        timeout,
        command,
        ..
    } = cli;

    let config = CliConfig {
        server: config
            .server
            .with_overrides(endpoint.as_deref(), insecure, timeout),
        ..config
    };

    if let Command::Config { action } = command {
        return match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        };
    }

    let client_config = config.server.to_client_config().map_err(CliError::Config)?;
    let client = JsonRpcClient::with_config(client_config)?;

    let output = commands::rpc::execute(&client, command).await?;
    println!("{}", output);
    Ok(())
}
