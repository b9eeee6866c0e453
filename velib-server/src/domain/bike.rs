//! Synthetic bike records.
//!
//! The provider only publishes per-station counts of electric and mechanical
//! bikes. Individual records are manufactured from those counts so front ends
//! can list bikes one by one. Numbers are stable for a given station and count
//! but say nothing about the physical bike behind them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a bike docked at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BikeKind {
    #[serde(rename = "E-Bike")]
    Electric,
    #[serde(rename = "Mechanical")]
    Mechanical,
}

impl BikeKind {
    /// Letter prepended to the bike number.
    pub fn prefix(self) -> char {
        match self {
            BikeKind::Electric => 'E',
            BikeKind::Mechanical => 'M',
        }
    }

    /// Human-readable label, also used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            BikeKind::Electric => "E-Bike",
            BikeKind::Mechanical => "Mechanical",
        }
    }
}

impl fmt::Display for BikeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Availability of a bike. Synthesized bikes are always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BikeStatus {
    Available,
}

impl fmt::Display for BikeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BikeStatus::Available => f.write_str("Available"),
        }
    }
}

/// A single bike record attached to a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bike {
    /// Bike number, e.g. `E16107-001`. Unique within its station only.
    #[serde(rename = "number")]
    pub id: String,

    #[serde(rename = "type")]
    pub kind: BikeKind,

    pub status: BikeStatus,
}

impl Bike {
    /// Build the `index`-th bike of `kind` at the given station.
    ///
    /// # Examples
    ///
    /// ```
    /// use velib_server::domain::{Bike, BikeKind};
    ///
    /// let bike = Bike::synthetic("16107", BikeKind::Mechanical, 7);
    /// assert_eq!(bike.id, "M16107-007");
    /// ```
    pub fn synthetic(station_code: &str, kind: BikeKind, index: u32) -> Self {
        Self {
            id: format!("{}{}-{:03}", kind.prefix(), station_code, index),
            kind,
            status: BikeStatus::Available,
        }
    }
}

/// Most bikes of one kind a station can report. Matches the three-digit
/// width of bike numbers.
pub const MAX_BIKES_PER_KIND: u32 = 999;

/// Expand aggregate counts into individually numbered bikes.
///
/// Electric bikes come first, then mechanical ones; each kind is numbered
/// from 1 in ascending order. The output depends only on the arguments.
/// Each count is capped at [`MAX_BIKES_PER_KIND`].
pub fn synthesize_bikes(station_code: &str, ebike_count: u32, mechanical_count: u32) -> Vec<Bike> {
    let electric = (1..=ebike_count.min(MAX_BIKES_PER_KIND))
        .map(|i| Bike::synthetic(station_code, BikeKind::Electric, i));
    let mechanical = (1..=mechanical_count.min(MAX_BIKES_PER_KIND))
        .map(|i| Bike::synthetic(station_code, BikeKind::Mechanical, i));

    electric.chain(mechanical).collect()
}
