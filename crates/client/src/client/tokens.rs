//! Nonce-token API operations.

use super::CxReportsClient;
use crate::error::Result;

impl CxReportsClient {
    /// Create a short-lived nonce token.
    ///
    /// Nonce tokens are minted against the bearer token and can be
    /// handed to collaborators that should not see the long-lived one.
    pub async fn create_auth_token(&self) -> Result<serde_json::Value> {
        let response = self
            .post(&self.global_url("api/v1/nonce-tokens"))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
