//! Vélib' station availability: fetching, normalization and snapshots.
//!
//! Rows come from the Paris open-data API (or a snapshot file when offline),
//! get decoded leniently, and are turned into [`Station`](crate::domain::Station)
//! values with synthesized bikes by [`load_stations`].

mod client;
mod convert;
mod error;
mod lenient;
mod snapshot;
mod snapshot_source;
mod source;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_LIMIT, ProbeReport, STATION_FIELDS, StationClient,
    StationClientConfig,
};
pub use convert::{convert_stations, synthesize};
pub use error::FetchError;
pub use snapshot::{Snapshot, SnapshotError, SnapshotStore};
pub use snapshot_source::SnapshotSource;
pub use source::{StationSource, load_stations};
pub use types::{ProbeResponse, RawStation, RecordsResponse};
