use std::time::Duration;

use tokio::sync::mpsc;

use crate::errors::RemoteLoadError;
use crate::sources::fetch_catalog;
use crate::state::types::AppEntry;

/// Catalog fetch request tagged with its reload id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Id from `LauncherState::begin_reload`.
    pub id: u64,
    /// Catalog endpoint.
    pub url: String,
    /// Overall request timeout.
    pub timeout: Duration,
}

/// Fetch outcome carrying the id of the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResult {
    /// Id of the originating request.
    pub id: u64,
    /// Sanitized entries or the load error.
    pub result: Result<Vec<AppEntry>, RemoteLoadError>,
}

/// What: Spawn the background worker that fetches the remote catalog.
///
/// Inputs:
/// - `req_rx`: Channel receiver for fetch requests
/// - `res_tx`: Channel sender for fetch results
///
/// Details:
/// - Requests queued while a fetch is running are coalesced: only the newest
///   one is fetched, since older ids would be discarded on commit anyway.
/// - Exits when the request channel closes or the result receiver is dropped.
pub fn spawn_catalog_worker(
    mut req_rx: mpsc::UnboundedReceiver<CatalogRequest>,
    res_tx: mpsc::UnboundedSender<CatalogResult>,
) {
    tokio::spawn(async move {
        while let Some(mut request) = req_rx.recv().await {
            while let Ok(newer) = req_rx.try_recv() {
                tracing::debug!(skipped = request.id, id = newer.id, "[Catalog] Coalescing reload");
                request = newer;
            }
            let result = fetch_catalog(&request.url, request.timeout).await;
            if res_tx
                .send(CatalogResult {
                    id: request.id,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
        tracing::debug!("[Catalog] Worker stopped");
    });
}
