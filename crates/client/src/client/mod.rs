//! HTTP client for the CxReports API.

pub mod query;
pub mod reports;
pub mod temp_data;
pub mod tokens;
pub mod workspaces;

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the CxReports API.
///
/// Scoped to a single workspace: every workspace endpoint shares the
/// `{base_url}/api/v1/ws/{workspace_id}/` prefix. The base URL,
/// workspace id and bearer token are fixed at construction, so a client
/// can be cloned and shared across tasks freely.
#[derive(Debug, Clone)]
pub struct CxReportsClient {
    client: reqwest::Client,
    base_url: String,
    workspace_id: i64,
    token: String,
}

/// Builder for [`CxReportsClient`] with non-default transport settings.
#[derive(Debug)]
pub struct CxReportsClientBuilder {
    base_url: String,
    workspace_id: i64,
    token: String,
    timeout: Duration,
    accept_invalid_certs: bool,
}

impl CxReportsClientBuilder {
    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Accept invalid TLS certificates.
    ///
    /// This disables certificate verification entirely and should only
    /// be used against development servers with self-signed
    /// certificates. Verification is on by default.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CxReportsClient> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .build()?;
        Ok(CxReportsClient {
            client,
            base_url: self.base_url,
            workspace_id: self.workspace_id,
            token: self.token,
        })
    }
}

impl CxReportsClient {
    /// Create a new client with default transport settings.
    pub fn new(
        base_url: impl Into<String>,
        workspace_id: i64,
        token: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(base_url, workspace_id, token).build()
    }

    /// Start building a client with custom transport settings.
    pub fn builder(
        base_url: impl Into<String>,
        workspace_id: i64,
        token: impl Into<String>,
    ) -> CxReportsClientBuilder {
        CxReportsClientBuilder {
            base_url: base_url.into(),
            workspace_id,
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the workspace id this client is scoped to.
    pub fn workspace_id(&self) -> i64 {
        self.workspace_id
    }

    /// Build a URL for a workspace-scoped endpoint.
    fn workspace_url(&self, path: &str) -> String {
        format!("{}/api/v1/ws/{}/{}", self.base_url, self.workspace_id, path)
    }

    /// Build a URL for a global endpoint.
    fn global_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Start a GET request with the bearer token attached.
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).bearer_auth(&self.token)
    }

    /// Start a POST request with the bearer token attached.
    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.post(url).bearer_auth(&self.token)
    }

    /// Validate a response and decode its body as JSON.
    ///
    /// The service answers every endpoint with JSON, except that an
    /// expired or invalid token yields its HTML login page with a 200
    /// status. The content-type sniff catches that case.
    async fn handle_response(&self, response: reqwest::Response) -> Result<serde_json::Value> {
        let response = check_status(response).await?;
        ensure_not_login_page(&response)?;
        response.json().await.map_err(ClientError::from)
    }

    /// Validate a response and return its body as raw PDF bytes.
    async fn handle_pdf_response(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let response = check_status(response).await?;
        ensure_not_login_page(&response)?;
        let content_type = content_type(&response);
        // Substring match on purpose: real servers send things like
        // `application/pdf; charset=binary`.
        if !content_type.contains("application/pdf") {
            return Err(ClientError::InvalidContentType {
                expected: "application/pdf",
                actual: content_type,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Fail on any non-2xx status, carrying the body text as the message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

/// The lower-cased `Content-Type` header, or the empty string.
fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Reject HTML payloads, the service's signal for a bad token.
fn ensure_not_login_page(response: &reqwest::Response) -> Result<()> {
    if content_type(response).starts_with("text/html") {
        return Err(ClientError::Unauthenticated);
    }
    Ok(())
}
