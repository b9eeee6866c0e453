//! Conversion from provider rows to domain stations.

use tracing::warn;

use crate::domain::{Bike, MAX_BIKES_PER_KIND, Station, synthesize_bikes};

use super::types::RawStation;

/// Bikes for one provider row, derived from its aggregate counts.
pub fn synthesize(raw: &RawStation) -> Vec<Bike> {
    synthesize_bikes(
        &raw.code,
        plausible_count(&raw.code, "ebike", raw.ebike_count),
        plausible_count(&raw.code, "mechanical", raw.mechanical_count),
    )
}

impl Station {
    /// Normalize a provider row and attach its synthesized bikes.
    ///
    /// A count above [`MAX_BIKES_PER_KIND`] is treated as malformed and
    /// becomes 0.
    pub fn from_raw(raw: RawStation) -> Self {
        let ebike_count = plausible_count(&raw.code, "ebike", raw.ebike_count);
        let mechanical_count = plausible_count(&raw.code, "mechanical", raw.mechanical_count);
        let bikes = synthesize_bikes(&raw.code, ebike_count, mechanical_count);
        Self {
            code: raw.code,
            name: raw.name,
            capacity: raw.capacity,
            ebike_count,
            mechanical_count,
            is_installed: raw.is_installed,
            is_renting: raw.is_renting,
            is_returning: raw.is_returning,
            location: raw.location,
            bikes,
        }
    }
}

fn plausible_count(code: &str, field: &'static str, count: u32) -> u32 {
    if count > MAX_BIKES_PER_KIND {
        warn!(station = code, field, count, "implausible bike count, using 0");
        0
    } else {
        count
    }
}

/// Normalize a whole result set, keeping provider order.
pub fn convert_stations(rows: Vec<RawStation>) -> Vec<Station> {
    rows.into_iter().map(Station::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BikeKind;

    fn raw(code: &str, ebike: u32, mechanical: u32) -> RawStation {
        RawStation {
            code: code.to_string(),
            name: "Benjamin Godard - Victor Hugo".to_string(),
            capacity: 35,
            ebike_count: ebike,
            mechanical_count: mechanical,
            is_installed: true,
            is_renting: true,
            is_returning: false,
            location: None,
        }
    }

    #[test]
    fn from_raw_attaches_bikes() {
        let station = Station::from_raw(raw("16107", 2, 1));

        let bikes: Vec<(&str, BikeKind)> =
            station.bikes.iter().map(|b| (b.id.as_str(), b.kind)).collect();
        assert_eq!(
            bikes,
            [
                ("E16107-001", BikeKind::Electric),
                ("E16107-002", BikeKind::Electric),
                ("M16107-001", BikeKind::Mechanical),
            ]
        );
        assert_eq!(station.capacity, 35);
        assert!(!station.is_returning);
    }

    #[test]
    fn bike_count_matches_aggregates() {
        let station = Station::from_raw(raw("901", 7, 11));
        assert_eq!(station.bikes.len() as u32, station.bike_total());
    }

    #[test]
    fn oversized_counts_become_zero() {
        let row: RawStation =
            serde_json::from_str(r#"{"stationcode":"1","ebike":"99999999999","mechanical":2}"#)
                .unwrap();
        let station = Station::from_raw(row);
        assert_eq!(station.ebike_count, 0);
        assert_eq!(station.mechanical_count, 2);
        assert_eq!(station.bikes.len(), 2);

        let station = Station::from_raw(raw("2", 5000, 1));
        assert_eq!(station.ebike_count, 0);
        assert_eq!(station.bikes.len() as u32, station.bike_total());
    }

    #[test]
    fn minimal_row_has_no_bikes() {
        let station = Station::from_raw(RawStation::default());
        assert!(station.bikes.is_empty());
        assert_eq!(station.code, "");
    }

    #[test]
    fn synthesize_twice_is_identical() {
        let row = raw("16107", 3, 2);
        assert_eq!(synthesize(&row), synthesize(&row));
    }

    #[test]
    fn convert_keeps_order() {
        let stations = convert_stations(vec![raw("2", 0, 1), raw("1", 1, 0)]);
        let codes: Vec<&str> = stations.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["2", "1"]);
    }
}
