//! Nonce-token CLI commands.

use clap::{Parser, Subcommand};

/// Token commands.
#[derive(Debug, Parser)]
pub struct TokensCommand {
    #[command(subcommand)]
    pub action: TokensAction,
}

/// Available token actions.
#[derive(Debug, Subcommand)]
pub enum TokensAction {
    /// Create a short-lived nonce token.
    Create,
}
