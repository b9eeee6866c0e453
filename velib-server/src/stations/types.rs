//! Open-data API response DTOs.
//!
//! These map the Explore v2.1 `records` endpoint of the Vélib' real-time
//! availability dataset. Rows are decoded field by field with the lenient
//! helpers, so a single odd value never rejects the response.

use serde::Deserialize;

use crate::domain::GeoPoint;

use super::lenient;

/// Response envelope of the `records` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsResponse {
    /// Number of rows matching the query, across all pages.
    #[serde(default)]
    pub total_count: Option<u64>,

    /// The requested page of rows.
    pub results: Vec<RawStation>,
}

/// Envelope of a connectivity probe. Rows are not inspected.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// One station row as published by the provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawStation {
    #[serde(rename = "stationcode", default, deserialize_with = "lenient::text")]
    pub code: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::count")]
    pub capacity: u32,

    /// Electric bikes docked.
    #[serde(rename = "ebike", default, deserialize_with = "lenient::count")]
    pub ebike_count: u32,

    /// Mechanical bikes docked.
    #[serde(rename = "mechanical", default, deserialize_with = "lenient::count")]
    pub mechanical_count: u32,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_installed: bool,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_renting: bool,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_returning: bool,

    #[serde(rename = "coordonnees_geo", default, deserialize_with = "lenient::location")]
    pub location: Option<GeoPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_provider_row() {
        let json = r#"{
            "stationcode": "16107",
            "name": "Benjamin Godard - Victor Hugo",
            "capacity": 35,
            "ebike": 2,
            "mechanical": 1,
            "is_installed": "OUI",
            "is_renting": "OUI",
            "is_returning": "NON",
            "coordonnees_geo": {"lon": 2.275725, "lat": 48.865983}
        }"#;

        let row: RawStation = serde_json::from_str(json).unwrap();
        assert_eq!(row.code, "16107");
        assert_eq!(row.name, "Benjamin Godard - Victor Hugo");
        assert_eq!(row.capacity, 35);
        assert_eq!(row.ebike_count, 2);
        assert_eq!(row.mechanical_count, 1);
        assert!(row.is_installed);
        assert!(row.is_renting);
        assert!(!row.is_returning);
        assert_eq!(
            row.location,
            Some(GeoPoint {
                lat: 48.865983,
                lon: 2.275725
            })
        );
    }

    #[test]
    fn minimal_row_defaults() {
        let row: RawStation = serde_json::from_str("{}").unwrap();
        assert_eq!(row, RawStation::default());
    }

    #[test]
    fn odd_fields_default_instead_of_failing() {
        let json = r#"{
            "stationcode": 16107,
            "name": null,
            "ebike": "3",
            "mechanical": "lots",
            "capacity": -1,
            "is_installed": true,
            "coordonnees_geo": "somewhere"
        }"#;

        let row: RawStation = serde_json::from_str(json).unwrap();
        assert_eq!(row.code, "16107");
        assert_eq!(row.name, "");
        assert_eq!(row.ebike_count, 3);
        assert_eq!(row.mechanical_count, 0);
        assert_eq!(row.capacity, 0);
        assert!(row.is_installed);
        assert!(row.location.is_none());
    }

    #[test]
    fn envelope_requires_results() {
        let ok: RecordsResponse =
            serde_json::from_str(r#"{"total_count": 1, "results": [{}]}"#).unwrap();
        assert_eq!(ok.total_count, Some(1));
        assert_eq!(ok.results.len(), 1);

        assert!(serde_json::from_str::<RecordsResponse>(r#"{"total_count": 1}"#).is_err());
    }

    #[test]
    fn bikes_list_in_row_is_ignored() {
        // Snapshot files carry synthesized bikes; reading them back as rows drops them.
        let json = r#"{"stationcode": "1", "ebike": 1, "bikes": [{"number": "E1-001"}]}"#;
        let row: RawStation = serde_json::from_str(json).unwrap();
        assert_eq!(row.ebike_count, 1);
    }
}
