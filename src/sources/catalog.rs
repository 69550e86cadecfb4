use std::time::Duration;

use crate::errors::RemoteLoadError;
use crate::logic::map_catalog_apps;
use crate::state::types::AppEntry;

/// Connect timeout for the catalog request.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// What: Build the HTTP client used for catalog fetches.
///
/// Details:
/// - Identifies itself with the crate name and version; never follows the
///   browser cache (`Cache-Control: no-store`).
fn build_client(timeout: Duration) -> Result<reqwest::Client, RemoteLoadError> {
    use reqwest::header::{ACCEPT, CACHE_CONTROL, HeaderMap, HeaderValue};
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .user_agent(format!("launchgrid/{}", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
        .map_err(|e| RemoteLoadError::Network(e.to_string()))
}

/// What: Decode a catalog response body.
///
/// Inputs:
/// - `body`: Raw response text.
///
/// Output:
/// - Sanitized entries with unique ids.
///
/// # Errors
/// - `RemoteLoadError::Parse` when the body is not JSON.
pub fn parse_catalog_body(body: &str) -> Result<Vec<AppEntry>, RemoteLoadError> {
    let payload: serde_json::Value =
        serde_json::from_str(body).map_err(|e| RemoteLoadError::Parse(e.to_string()))?;
    Ok(map_catalog_apps(&payload))
}

/// What: Fetch and sanitize the remote catalog.
///
/// Inputs:
/// - `url`: Catalog endpoint.
/// - `timeout`: Overall request timeout.
///
/// Output:
/// - Sanitized catalog entries.
///
/// # Errors
/// - `RemoteLoadError::Network` on transport failure or timeout.
/// - `RemoteLoadError::Status` on a non-success HTTP status.
/// - `RemoteLoadError::Parse` when the body is not JSON.
pub async fn fetch_catalog(url: &str, timeout: Duration) -> Result<Vec<AppEntry>, RemoteLoadError> {
    let client = build_client(timeout)?;
    tracing::debug!(url, "[Catalog] Fetching");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| RemoteLoadError::Network(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url, status = status.as_u16(), "[Catalog] Non-success status");
        return Err(RemoteLoadError::Status(status.as_u16()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| RemoteLoadError::Network(e.to_string()))?;
    let entries = parse_catalog_body(&body)?;
    tracing::info!(url, count = entries.len(), "[Catalog] Fetched");
    Ok(entries)
}
