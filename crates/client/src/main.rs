//! cxreports CLI entry point.

use std::io::Read as _;

use clap::Parser;
use cxreports_client::cli::{Cli, Commands};
use cxreports_client::client::CxReportsClient;
use cxreports_client::output::format_output;
use cxreports_client::PdfQuery;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cxreports_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let client = CxReportsClient::builder(&cli.base_url, cli.workspace, &cli.token)
        .accept_invalid_certs(cli.insecure)
        .build()?;

    match cli.command {
        Commands::Workspaces(workspaces_cmd) => {
            use cxreports_client::cli::workspaces::WorkspacesAction;
            match workspaces_cmd.action {
                WorkspacesAction::List => {
                    let workspaces = client.list_workspaces().await?;
                    println!("{}", format_output(&workspaces, cli.format));
                }
            }
        }
        Commands::Reports(reports_cmd) => {
            use cxreports_client::cli::reports::ReportsAction;
            match reports_cmd.action {
                ReportsAction::Types => {
                    let types = client.list_report_types().await?;
                    println!("{}", format_output(&types, cli.format));
                }
                ReportsAction::List { report_type } => {
                    let reports = client.list_reports(&report_type).await?;
                    println!("{}", format_output(&reports, cli.format));
                }
                ReportsAction::Pdf {
                    id,
                    temp_data_id,
                    params,
                    output,
                } => {
                    let params = params
                        .as_deref()
                        .map(serde_json::from_str::<serde_json::Value>)
                        .transpose()?;
                    let query = if temp_data_id.is_some() || params.is_some() {
                        Some(PdfQuery {
                            temp_data_id,
                            params,
                        })
                    } else {
                        None
                    };
                    let bytes = client.get_pdf(id, query.as_ref()).await?;
                    tokio::fs::write(&output, &bytes).await?;
                    if !cli.quiet {
                        println!("Wrote {} bytes to {}", bytes.len(), output.display());
                    }
                }
                ReportsAction::Download { id, path } => {
                    client.download_pdf(id, &path).await?;
                    if !cli.quiet {
                        println!("Downloaded report {} into {}", id, path.display());
                    }
                }
            }
        }
        Commands::Tokens(tokens_cmd) => {
            use cxreports_client::cli::tokens::TokensAction;
            match tokens_cmd.action {
                TokensAction::Create => {
                    let token = client.create_auth_token().await?;
                    println!("{}", format_output(&token, cli.format));
                }
            }
        }
        Commands::TempData(temp_data_cmd) => {
            use cxreports_client::cli::temp_data::TempDataAction;
            match temp_data_cmd.action {
                TempDataAction::Push { data } => {
                    let raw = match data {
                        Some(raw) => raw,
                        None => {
                            let mut buffer = String::new();
                            std::io::stdin().read_to_string(&mut buffer)?;
                            buffer
                        }
                    };
                    let payload: serde_json::Value = serde_json::from_str(&raw)?;
                    let created = client.push_temporary_data(payload).await?;
                    println!("{}", format_output(&created, cli.format));
                }
            }
        }
    }

    Ok(())
}
