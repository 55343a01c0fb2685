//! Report CLI commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Report commands.
#[derive(Debug, Parser)]
pub struct ReportsCommand {
    #[command(subcommand)]
    pub action: ReportsAction,
}

/// Available report actions.
#[derive(Debug, Subcommand)]
pub enum ReportsAction {
    /// List the report types defined in the workspace.
    Types,
    /// List reports of a given type.
    List {
        /// Report type slug to filter by.
        #[arg(long = "type")]
        report_type: String,
    },
    /// Render a report to PDF and write it to a file.
    Pdf {
        /// Report id.
        id: i64,
        /// Id of staged temporary data to render against.
        #[arg(long)]
        temp_data_id: Option<i64>,
        /// Report parameters as an inline JSON object.
        #[arg(long)]
        params: Option<String>,
        /// File to write the PDF to.
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Download a report PDF, honoring the server-suggested file name.
    Download {
        /// Report id.
        id: i64,
        /// Directory to save into (or exact file path when the server
        /// suggests no name).
        path: PathBuf,
    },
}
