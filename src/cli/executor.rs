//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::Settings;

/// Execute a CLI command with the given settings
///
/// A missing subcommand behaves like a plain `serve`.
///
/// # Errors
/// Returns errors from command handlers, including server startup failures
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings).execute(*dry_run).await
        }
        None => ServeCommandHandler::new(settings).execute(false).await,
    }
}
