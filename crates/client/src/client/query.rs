//! Query-parameter encoding for PDF render requests.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

use crate::error::Result;

/// Optional parameters for a PDF render request.
#[derive(Debug, Clone, Default)]
pub struct PdfQuery {
    /// Id of previously staged temporary data to render the report
    /// against (see
    /// [`push_temporary_data`](super::CxReportsClient::push_temporary_data)).
    pub temp_data_id: Option<i64>,
    /// Report parameters, carried on the URL as a base64url-encoded
    /// JSON blob. Only JSON objects are understood by the server; any
    /// other value is silently dropped rather than rejected.
    pub params: Option<serde_json::Value>,
}

/// Encode an optional [`PdfQuery`] into a URL query string.
///
/// `None` yields the empty string. A present query always yields a
/// leading `?`, even when it contributes no pairs: the server treats a
/// bare `?` as no query, and callers have always been allowed to pass
/// an empty parameter set. Recognized keys appear in the fixed order
/// `tempDataId`, then `params`.
pub(crate) fn encode(query: Option<&PdfQuery>) -> Result<String> {
    let Some(query) = query else {
        return Ok(String::new());
    };

    let mut pairs: Vec<(&str, String)> = Vec::new();
    if let Some(id) = query.temp_data_id {
        pairs.push(("tempDataId", id.to_string()));
    }
    if let Some(params) = &query.params {
        if params.is_object() {
            let json = serde_json::to_string(params)?;
            pairs.push(("params", URL_SAFE.encode(json.as_bytes())));
        }
    }

    let encoded = pairs
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&");
    Ok(format!("?{encoded}"))
}
