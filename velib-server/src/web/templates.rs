//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Bike, BikeKind, NetworkTotals, Station};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Station list with search box.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub query: String,
    pub stations: Vec<StationRow>,
    pub totals: NetworkTotals,
}

/// Detail page of one station.
#[derive(Template)]
#[template(path = "station.html")]
pub struct StationTemplate {
    pub station: StationDetailView,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One row of the station table.
#[derive(Debug, Clone)]
pub struct StationRow {
    pub code: String,
    /// `code` percent-encoded for use as a path segment
    pub code_path: String,
    pub name: String,
    pub ebikes: u32,
    pub mechanical: u32,
    pub capacity: u32,
    pub is_active: bool,
}

impl StationRow {
    pub fn from_station(station: &Station) -> Self {
        Self {
            code: station.code.clone(),
            code_path: urlencoding::encode(&station.code).into_owned(),
            name: station.name.clone(),
            ebikes: station.ebike_count,
            mechanical: station.mechanical_count,
            capacity: station.capacity,
            is_active: station.is_active(),
        }
    }

    pub fn status(&self) -> &'static str {
        status_label(self.is_active)
    }
}

/// Everything the detail page shows about a station.
#[derive(Debug, Clone)]
pub struct StationDetailView {
    pub code: String,
    pub name: String,
    pub is_active: bool,
    pub installed: bool,
    pub renting: bool,
    pub returning: bool,
    pub ebike_count: u32,
    pub mechanical_count: u32,
    pub bike_total: u32,
    pub capacity: u32,
    pub electric: Vec<BikeView>,
    pub mechanical: Vec<BikeView>,
    /// "lat, lon" when known
    pub location: Option<String>,
}

impl StationDetailView {
    pub fn from_station(station: &Station) -> Self {
        let bikes_of = |kind: BikeKind| -> Vec<BikeView> {
            station.bikes_of(kind).map(BikeView::from_bike).collect()
        };

        Self {
            code: station.code.clone(),
            name: station.name.clone(),
            is_active: station.is_active(),
            installed: station.is_installed,
            renting: station.is_renting,
            returning: station.is_returning,
            ebike_count: station.ebike_count,
            mechanical_count: station.mechanical_count,
            bike_total: station.bike_total(),
            capacity: station.capacity,
            electric: bikes_of(BikeKind::Electric),
            mechanical: bikes_of(BikeKind::Mechanical),
            location: station
                .location
                .map(|p| format!("{}, {}", p.lat, p.lon)),
        }
    }

    pub fn status(&self) -> &'static str {
        status_label(self.is_active)
    }

    pub fn has_bikes(&self) -> bool {
        !self.electric.is_empty() || !self.mechanical.is_empty()
    }
}

/// A bike line on the detail page.
#[derive(Debug, Clone)]
pub struct BikeView {
    pub number: String,
    pub status: String,
}

impl BikeView {
    pub fn from_bike(bike: &Bike) -> Self {
        Self {
            number: bike.id.clone(),
            status: bike.status.to_string(),
        }
    }
}

fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;
    use crate::stations::convert_stations;
    use crate::test_utils::raw_station;

    fn station() -> Station {
        let mut s = convert_stations(vec![raw_station(
            "16107",
            "Benjamin Godard - Victor Hugo",
            2,
            1,
        )])
        .remove(0);
        s.location = Some(GeoPoint {
            lat: 48.865983,
            lon: 2.275725,
        });
        s
    }

    #[test]
    fn detail_view_splits_bikes() {
        let view = StationDetailView::from_station(&station());
        let electric: Vec<&str> = view.electric.iter().map(|b| b.number.as_str()).collect();
        let mechanical: Vec<&str> = view.mechanical.iter().map(|b| b.number.as_str()).collect();

        assert_eq!(electric, ["E16107-001", "E16107-002"]);
        assert_eq!(mechanical, ["M16107-001"]);
        assert_eq!(view.bike_total, 3);
        assert_eq!(view.location.as_deref(), Some("48.865983, 2.275725"));
        assert_eq!(view.status(), "Active");
        assert!(view.has_bikes());
    }

    #[test]
    fn row_status() {
        let mut s = station();
        assert_eq!(StationRow::from_station(&s).status(), "Active");
        s.is_renting = false;
        assert_eq!(StationRow::from_station(&s).status(), "Inactive");
    }

    #[test]
    fn index_renders_rows_and_escapes_query() {
        let s = station();
        let template = IndexTemplate {
            query: "<b>godard</b>".to_string(),
            stations: vec![StationRow::from_station(&s)],
            totals: NetworkTotals::from_stations(std::slice::from_ref(&s)),
        };
        let html = template.render().unwrap();

        assert!(html.contains("Benjamin Godard - Victor Hugo"));
        assert!(html.contains("/stations/16107"));
        assert!(!html.contains("<b>godard</b>"));
    }

    #[test]
    fn row_link_is_percent_encoded() {
        let mut s = station();
        s.code = "16 107/b?".to_string();
        let html = IndexTemplate {
            query: String::new(),
            stations: vec![StationRow::from_station(&s)],
            totals: NetworkTotals::from_stations(std::slice::from_ref(&s)),
        }
        .render()
        .unwrap();

        assert!(html.contains("/stations/16%20107%2Fb%3F\""));
    }

    #[test]
    fn station_page_lists_bike_numbers() {
        let template = StationTemplate {
            station: StationDetailView::from_station(&station()),
        };
        let html = template.render().unwrap();

        assert!(html.contains("E16107-002"));
        assert!(html.contains("M16107-001"));
        assert!(html.contains("48.865983, 2.275725"));
    }

    #[test]
    fn station_page_without_bikes() {
        let mut s = station();
        s.bikes.clear();
        s.location = None;
        let html = StationTemplate {
            station: StationDetailView::from_station(&s),
        }
        .render()
        .unwrap();

        assert!(html.contains("No bikes docked"));
        assert!(!html.contains("Location:"));
    }
}
