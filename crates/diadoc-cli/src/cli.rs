//! CLI argument definitions.

use clap::{Args, Parser};

use crate::commands::Commands;

/// Diadoc API command-line client.
#[derive(Parser, Debug)]
#[command(name = "diadoc")]
#[command(author, version = env!("DIADOC_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Account and endpoint settings shared by every networked command.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Account login
    #[arg(long, env = "DIADOC_LOGIN")]
    pub login: String,

    /// Account password
    #[arg(long, env = "DIADOC_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// API client identifier issued to the integration
    #[arg(long, env = "DIADOC_CLIENT_ID")]
    pub client_id: String,

    /// API host, or a full base URL
    #[arg(long, env = "DIADOC_HOST", default_value = diadoc_core::types::DEFAULT_HOST)]
    pub host: String,

    /// Session token to start with instead of the stored one
    #[arg(long, env = "DIADOC_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,
}
