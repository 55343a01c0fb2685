//! Temporary-data CLI commands.

use clap::{Parser, Subcommand};

/// Temporary-data commands.
#[derive(Debug, Parser)]
pub struct TempDataCommand {
    #[command(subcommand)]
    pub action: TempDataAction,
}

/// Available temporary-data actions.
#[derive(Debug, Subcommand)]
pub enum TempDataAction {
    /// Stage a JSON payload server-side for use as report input.
    Push {
        /// Inline JSON payload; read from stdin when omitted.
        data: Option<String>,
    },
}
