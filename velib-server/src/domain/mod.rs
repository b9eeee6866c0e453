//! Domain types for the station viewer.
//!
//! Stations as presented to every front end, the synthetic bikes attached to
//! them, and the name search over station lists. Nothing here performs I/O.

mod bike;
mod search;
mod station;

pub use bike::{Bike, BikeKind, BikeStatus, MAX_BIKES_PER_KIND, synthesize_bikes};
pub use search::{find_by_code, search};
pub use station::{GeoPoint, NetworkTotals, Station};
