//! Report API operations.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::query::{self, PdfQuery};
use super::CxReportsClient;
use crate::error::Result;

impl CxReportsClient {
    /// List the report types defined in the workspace.
    pub async fn list_report_types(&self) -> Result<serde_json::Value> {
        let response = self
            .get(&self.workspace_url("report-types"))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List reports of the given type.
    ///
    /// `report_type` is a server-side slug and is inserted into the URL
    /// verbatim, without percent-encoding. The server has never
    /// accepted encoded type identifiers here.
    pub async fn list_reports(&self, report_type: &str) -> Result<serde_json::Value> {
        let response = self.get(&self.reports_url(report_type)).send().await?;
        self.handle_response(response).await
    }

    /// Fetch a rendered report as raw PDF bytes.
    ///
    /// `query` optionally points the render at staged temporary data
    /// and/or a set of report parameters; see [`PdfQuery`].
    pub async fn get_pdf(
        &self,
        report_id: i64,
        query: Option<&PdfQuery>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.pdf_url(report_id), query::encode(query)?);
        debug!(%url, "requesting rendered report");
        let response = self.get(&url).send().await?;
        self.handle_pdf_response(response).await
    }

    /// Fetch a rendered report and write it to disk.
    ///
    /// When the response carries a `Content-Disposition` header with a
    /// `filename=` token, that name is joined onto `save_path` (treated
    /// as a directory); otherwise the bytes go to `save_path` itself.
    pub async fn download_pdf(&self, report_id: i64, save_path: &Path) -> Result<()> {
        let response = self.get(&self.pdf_url(report_id)).send().await?;
        let target: PathBuf = match content_disposition_filename(response.headers()) {
            Some(name) => save_path.join(name),
            None => save_path.to_path_buf(),
        };
        let bytes = self.handle_pdf_response(response).await?;
        tokio::fs::write(&target, &bytes).await?;
        debug!(path = %target.display(), "saved rendered report");
        Ok(())
    }

    fn reports_url(&self, report_type: &str) -> String {
        self.workspace_url(&format!("reports?type={report_type}"))
    }

    fn pdf_url(&self, report_id: i64) -> String {
        self.workspace_url(&format!("reports/{report_id}/pdf"))
    }
}

/// Extract the suggested file name from a `Content-Disposition` header.
///
/// The value after `filename=` is truncated at the first `;` and
/// stripped of surrounding quotes.
fn content_disposition_filename(headers: &reqwest::header::HeaderMap) -> Option<String> {
    let value = headers
        .get(reqwest::header::CONTENT_DISPOSITION)?
        .to_str()
        .ok()?;
    let (_, rest) = value.split_once("filename=")?;
    let name = rest
        .split(';')
        .next()
        .unwrap_or(rest)
        .trim()
        .trim_matches('"');
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_DISPOSITION};

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_DISPOSITION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn filename_with_quotes() {
        let headers = headers_with("attachment; filename=\"report.pdf\"");
        assert_eq!(
            content_disposition_filename(&headers).as_deref(),
            Some("report.pdf")
        );
    }

    #[test]
    fn filename_without_quotes() {
        let headers = headers_with("attachment; filename=report.pdf");
        assert_eq!(
            content_disposition_filename(&headers).as_deref(),
            Some("report.pdf")
        );
    }

    #[test]
    fn filename_truncates_at_semicolon() {
        let headers = headers_with("attachment; filename=\"report.pdf\"; size=1024");
        assert_eq!(
            content_disposition_filename(&headers).as_deref(),
            Some("report.pdf")
        );
    }

    #[test]
    fn missing_filename_token() {
        let headers = headers_with("attachment");
        assert_eq!(content_disposition_filename(&headers), None);
    }

    #[test]
    fn absent_header() {
        assert_eq!(content_disposition_filename(&HeaderMap::new()), None);
    }

    #[test]
    fn reports_url_keeps_type_verbatim() {
        let client = CxReportsClient::new("https://reports.example.com", 7, "t").unwrap();
        assert_eq!(
            client.reports_url("invoice"),
            "https://reports.example.com/api/v1/ws/7/reports?type=invoice"
        );
        // Spaces included: the type is never percent-encoded.
        assert!(client.reports_url("a b").ends_with("reports?type=a b"));
    }
}
