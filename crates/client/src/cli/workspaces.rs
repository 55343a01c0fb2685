//! Workspace CLI commands.

use clap::{Parser, Subcommand};

/// Workspace commands.
#[derive(Debug, Parser)]
pub struct WorkspacesCommand {
    #[command(subcommand)]
    pub action: WorkspacesAction,
}

/// Available workspace actions.
#[derive(Debug, Subcommand)]
pub enum WorkspacesAction {
    /// List all workspaces visible to the token.
    List,
}
