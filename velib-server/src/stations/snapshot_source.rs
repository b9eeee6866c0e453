//! Offline station source backed by a snapshot file.
//!
//! Loads a snapshot written by the `snapshot` command and replays its rows as
//! if they had just been fetched. Useful for development without network
//! access and for demos.

use std::path::Path;
use std::sync::Arc;

use futures::future::BoxFuture;

use super::error::FetchError;
use super::source::StationSource;
use super::types::{RawStation, RecordsResponse};

/// Station source that serves rows read from a snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    rows: Arc<Vec<RawStation>>,
}

impl SnapshotSource {
    /// Load rows from a snapshot file.
    ///
    /// The file must hold a `{ "results": [...] }` document; bikes stored in
    /// it are ignored and synthesized again on each fetch.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| FetchError::Snapshot {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let response: RecordsResponse =
            serde_json::from_str(&json).map_err(|e| FetchError::Snapshot {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?;

        Ok(Self::from_rows(response.results))
    }

    /// Serve a fixed set of rows.
    pub fn from_rows(rows: Vec<RawStation>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }

    /// Number of rows available.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the snapshot holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl StationSource for SnapshotSource {
    fn fetch_stations(&self, limit: usize) -> BoxFuture<'_, Result<Vec<RawStation>, FetchError>> {
        let rows = self.rows.iter().take(limit).cloned().collect();
        Box::pin(futures::future::ready(Ok(rows)))
    }
}
