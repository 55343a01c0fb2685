//! cxreports_client - API client for the CxReports report-generation service.
//!
//! The client is workspace-scoped: it is constructed with a base URL, a
//! workspace id and a bearer token, all immutable for its lifetime.
//!
//! ```no_run
//! # async fn run() -> cxreports_client::Result<()> {
//! use cxreports_client::CxReportsClient;
//!
//! let client = CxReportsClient::new("https://reports.example.com", 42, "token")?;
//! let reports = client.list_reports("invoice").await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::query::PdfQuery;
pub use client::CxReportsClient;
pub use error::{ClientError, Result};
