//! Command line client for a running instance (`app-cli`).
//!
//! `health` fails when the service cannot be reached or does not report
//! `"healthy"`, so the binary doubles as a container health check.

use app_client::{AppClient, ClientError};
use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "app-cli")]
#[command(about = "Query a running Docker Practice App instance", long_about = None)]
pub struct Cli {
    #[arg(short, long, env = "APP_URL", default_value = "http://localhost:3000")]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe /health; exits nonzero unless the service reports healthy
    Health,
    /// Show the greeting and config snapshot from /
    Info,
    /// Show uptime and memory usage from /api/status
    Status,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("service reported status {0:?}")]
    Unhealthy(String),

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Execute one subcommand, printing the response as pretty JSON.
pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let client = AppClient::new(&cli.url);

    match cli.command {
        Commands::Health => {
            let health = client.health().await?;
            if !health.is_healthy() {
                return Err(CliError::Unhealthy(health.status));
            }
            print_json(&health)
        }
        Commands::Info => print_json(&client.root().await?),
        Commands::Status => print_json(&client.status().await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_flag_and_subcommand_parse() {
        let cli = Cli::try_parse_from(["app-cli", "--url", "http://10.0.0.5:8080", "status"]).unwrap();
        assert_eq!(cli.url, "http://10.0.0.5:8080");
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["app-cli"]).is_err());
    }
}
