//! Station view model.

use serde::{Deserialize, Serialize};

use super::bike::{Bike, BikeKind};

/// WGS84 coordinates of a station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A docking station with its synthesized bikes.
///
/// Serializes with the provider's field names so the JSON API and snapshot
/// files look like provider rows with an extra `bikes` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "stationcode")]
    pub code: String,

    pub name: String,

    /// Number of docks.
    pub capacity: u32,

    #[serde(rename = "ebike")]
    pub ebike_count: u32,

    #[serde(rename = "mechanical")]
    pub mechanical_count: u32,

    pub is_installed: bool,
    pub is_renting: bool,
    pub is_returning: bool,

    #[serde(
        rename = "coordonnees_geo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<GeoPoint>,

    /// Electric bikes first, then mechanical, each numbered from 1.
    #[serde(default)]
    pub bikes: Vec<Bike>,
}

impl Station {
    /// A station is usable when it is both installed and renting.
    pub fn is_active(&self) -> bool {
        self.is_installed && self.is_renting
    }

    /// Total bikes docked, both kinds.
    pub fn bike_total(&self) -> u32 {
        self.ebike_count.saturating_add(self.mechanical_count)
    }

    /// Bikes of one kind, in numbering order.
    pub fn bikes_of(&self, kind: BikeKind) -> impl Iterator<Item = &Bike> {
        self.bikes.iter().filter(move |b| b.kind == kind)
    }
}

/// Bike counts summed over a set of stations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkTotals {
    pub stations: usize,
    pub ebikes: u64,
    pub mechanical: u64,
}

impl NetworkTotals {
    pub fn from_stations(stations: &[Station]) -> Self {
        stations.iter().fold(
            Self {
                stations: stations.len(),
                ..Self::default()
            },
            |acc, s| Self {
                ebikes: acc.ebikes + u64::from(s.ebike_count),
                mechanical: acc.mechanical + u64::from(s.mechanical_count),
                ..acc
            },
        )
    }

    pub fn total(&self) -> u64 {
        self.ebikes + self.mechanical
    }
}
