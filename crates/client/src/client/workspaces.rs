//! Workspace API operations.

use super::CxReportsClient;
use crate::error::Result;

impl CxReportsClient {
    /// List all workspaces visible to the token.
    ///
    /// This is a global endpoint; the client's workspace id plays no
    /// part in it.
    pub async fn list_workspaces(&self) -> Result<serde_json::Value> {
        let response = self.get(&self.global_url("api/v1/workspaces")).send().await?;
        self.handle_response(response).await
    }
}
