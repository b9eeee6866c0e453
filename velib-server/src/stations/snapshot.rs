//! Timestamped JSON snapshots of station data.
//!
//! A snapshot is the full result of one fetch-and-synthesize pass, written as
//! `velib_data_<YYYYmmdd_HHMMSS>.json`. Files are never edited in place: each
//! write produces a complete file or nothing.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::Station;

const FILE_PREFIX: &str = "velib_data_";
const FILE_SUFFIX: &str = ".json";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Errors from reading or writing snapshot files.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// File system operation failed
    #[error("snapshot I/O error: {message}")]
    Io { message: String },

    /// Snapshot content could not be (de)serialized
    #[error("snapshot JSON error: {message}")]
    Json { message: String },
}

/// Snapshot document: the provider envelope with synthesized stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub total_count: usize,
    pub results: Vec<Station>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    total_count: usize,
    results: &'a [Station],
}

/// Directory of snapshot files.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Create a store writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the snapshot directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a snapshot taken at `at`.
    pub fn file_name(at: NaiveDateTime) -> String {
        format!("{FILE_PREFIX}{}{FILE_SUFFIX}", at.format(TIMESTAMP_FORMAT))
    }

    /// Write a snapshot stamped with the current local time.
    pub fn save(&self, stations: &[Station]) -> Result<PathBuf, SnapshotError> {
        self.save_at(stations, Local::now().naive_local())
    }

    /// Write a snapshot stamped with `at`.
    ///
    /// Creates the directory if needed. The content is written to a sibling
    /// temporary file first and renamed into place, replacing any snapshot
    /// with the same timestamp.
    pub fn save_at(
        &self,
        stations: &[Station],
        at: NaiveDateTime,
    ) -> Result<PathBuf, SnapshotError> {
        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| SnapshotError::Io {
                message: format!("failed to create snapshot directory: {}", e),
            })?;
        }

        let snapshot = SnapshotRef {
            total_count: stations.len(),
            results: stations,
        };
        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| SnapshotError::Json {
            message: format!("failed to serialize snapshot: {}", e),
        })?;

        let path = self.dir.join(Self::file_name(at));
        let tmp = path.with_extension("json.tmp");

        std::fs::write(&tmp, json).map_err(|e| SnapshotError::Io {
            message: format!("failed to write {}: {}", tmp.display(), e),
        })?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            if let Err(cleanup) = std::fs::remove_file(&tmp) {
                warn!(
                    path = %tmp.display(),
                    error = %cleanup,
                    "failed to remove temporary snapshot"
                );
            }
            return Err(SnapshotError::Io {
                message: format!("failed to move snapshot into place: {}", e),
            });
        }

        info!(path = %path.display(), stations = stations.len(), "snapshot written");
        Ok(path)
    }

    /// Snapshot files in the directory, oldest first.
    ///
    /// A missing directory has no snapshots.
    pub fn list(&self) -> Result<Vec<PathBuf>, SnapshotError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(SnapshotError::Io {
                    message: format!("failed to read {}: {}", self.dir.display(), e),
                });
            }
        };

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SnapshotError::Io {
                message: format!("failed to read directory entry: {}", e),
            })?;
            let path = entry.path();
            let is_snapshot = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_snapshot_name);
            if is_snapshot && path.is_file() {
                paths.push(path);
            }
        }

        // Timestamps are fixed-width, so name order is time order
        paths.sort();
        Ok(paths)
    }

    /// The most recent snapshot, if any.
    pub fn latest(&self) -> Result<Option<PathBuf>, SnapshotError> {
        Ok(self.list()?.pop())
    }

    /// Delete every snapshot in the directory.
    ///
    /// Returns the deleted paths. A file that can't be removed is logged and
    /// skipped.
    pub fn cleanup(&self) -> Result<Vec<PathBuf>, SnapshotError> {
        let mut deleted = Vec::new();
        for path in self.list()? {
            match std::fs::remove_file(&path) {
                Ok(()) => deleted.push(path),
                Err(e) => warn!(path = %path.display(), error = %e, "failed to delete snapshot"),
            }
        }
        Ok(deleted)
    }

    /// Read a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        serde_json::from_str(&contents).map_err(|e| SnapshotError::Json {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }
}

fn is_snapshot_name(name: &str) -> bool {
    name.len() > FILE_PREFIX.len() + FILE_SUFFIX.len()
        && name.starts_with(FILE_PREFIX)
        && name.ends_with(FILE_SUFFIX)
}
