//! CLI command definitions.

pub mod reports;
pub mod temp_data;
pub mod tokens;
pub mod workspaces;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the CxReports API.
#[derive(Debug, Parser)]
#[command(name = "cxreports")]
#[command(about = "CLI client for the CxReports API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "CXREPORTS_URL")]
    pub base_url: String,

    /// Workspace id scoping report operations.
    #[arg(long, env = "CXREPORTS_WORKSPACE")]
    pub workspace: i64,

    /// Bearer token.
    #[arg(long, env = "CXREPORTS_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Skip TLS certificate verification (for development servers).
    #[arg(long)]
    pub insecure: bool,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Workspace listing.
    Workspaces(workspaces::WorkspacesCommand),
    /// Report types, report listings and PDF rendering.
    Reports(reports::ReportsCommand),
    /// Nonce-token management.
    Tokens(tokens::TokensCommand),
    /// Temporary report data.
    TempData(temp_data::TempDataCommand),
}
