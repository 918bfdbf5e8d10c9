//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// kamctl - Kamailio JSON-RPC from the command line
#[derive(Debug, Parser)]
#[command(name = "kamctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "KAMRPC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    // --- Connection flags ---
    /// JSON-RPC endpoint (e.g. http://127.0.0.1:5060/RPC)
    #[arg(long, short, env = "KAMRPC_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, short = 'k')]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Echo the arguments back (core.echo)
    Echo {
        /// Values to echo
        args: Vec<String>,
    },

    /// Remote registration management (uac.*)
    Uac {
        #[command(subcommand)]
        action: UacAction,
    },

    /// Domain table commands (domain.*)
    Domain {
        #[command(subcommand)]
        action: DomainAction,
    },

    /// Location service commands (ul.*)
    Ul {
        #[command(subcommand)]
        action: UlAction,
    },

    /// Call any method and print its raw result
    Call {
        /// Remote method name (e.g. core.version)
        method: String,

        /// String parameters, sent positionally
        params: Vec<String>,

        /// Send this JSON value as the only parameter instead
        #[arg(long, conflicts_with = "params")]
        json: Option<String>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `uac.*` actions.
#[derive(Debug, Subcommand)]
pub enum UacAction {
    /// Enable a registration (uac.reg_enable)
    Enable { params: Vec<String> },
    /// Disable a registration (uac.reg_disable)
    Disable { params: Vec<String> },
    /// Reload the registration table (uac.reg_reload)
    Reload { params: Vec<String> },
    /// Refresh one registration (uac.reg_refresh)
    Refresh { params: Vec<String> },
    /// Show a registration record (uac.reg_info)
    Info { params: Vec<String> },
}

/// `domain.*` actions.
#[derive(Debug, Subcommand)]
pub enum DomainAction {
    /// Reload the domain table (domain.reload)
    Reload,
}

/// `ul.*` actions.
#[derive(Debug, Subcommand)]
pub enum UlAction {
    /// Dump all location records (ul.dump)
    Dump {
        /// Extra parameters, e.g. "brief"
        params: Vec<String>,
    },
    /// Look up one address-of-record (ul.lookup)
    Lookup {
        /// Location table, usually "location"
        table: String,
        /// Address-of-record to look up
        aor: String,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
