//! Temporary-data API operations.

use super::CxReportsClient;
use crate::error::Result;

/// Request body for staging temporary report data.
#[derive(Debug, serde::Serialize)]
struct PushTemporaryDataRequest {
    content: serde_json::Value,
}

impl CxReportsClient {
    /// Stage an ad-hoc JSON payload server-side for use as report
    /// input.
    ///
    /// The returned value carries the id to pass as `temp_data_id` when
    /// rendering (see [`PdfQuery`](super::query::PdfQuery)).
    pub async fn push_temporary_data(
        &self,
        data: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let response = self
            .post(&self.workspace_url("temporary-data"))
            .json(&PushTemporaryDataRequest { content: data })
            .send()
            .await?;
        self.handle_response(response).await
    }
}
