//! Abstraction over where station rows come from.

use futures::future::BoxFuture;

use crate::domain::Station;

use super::client::StationClient;
use super::convert::convert_stations;
use super::error::FetchError;
use super::types::RawStation;

/// Something that yields raw station rows.
///
/// Implemented by the live [`StationClient`] and by
/// [`SnapshotSource`](super::SnapshotSource) for offline use. Front ends hold
/// a `dyn StationSource` and never care which one they got.
pub trait StationSource: Send + Sync {
    /// Fetch up to `limit` rows.
    fn fetch_stations(&self, limit: usize) -> BoxFuture<'_, Result<Vec<RawStation>, FetchError>>;
}

impl StationSource for StationClient {
    fn fetch_stations(&self, limit: usize) -> BoxFuture<'_, Result<Vec<RawStation>, FetchError>> {
        Box::pin(StationClient::fetch_stations(self, limit))
    }
}

/// Fetch rows and turn them into stations with synthesized bikes.
///
/// This is the one pipeline shared by the CLI and the web layer. Nothing is
/// kept between calls.
pub async fn load_stations(
    source: &dyn StationSource,
    limit: usize,
) -> Result<Vec<Station>, FetchError> {
    let rows = source.fetch_stations(limit).await?;
    Ok(convert_stations(rows))
}
