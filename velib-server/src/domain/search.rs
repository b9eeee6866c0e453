//! Station lookup by name and code.

use super::station::Station;

/// Keep the stations whose name contains `query`, ignoring case.
///
/// Order is preserved. An empty query keeps everything.
///
/// # Examples
///
/// ```
/// # use velib_server::domain::{Station, search};
/// # fn named(name: &str) -> Station {
/// #     Station {
/// #         code: String::new(), name: name.to_string(), capacity: 0,
/// #         ebike_count: 0, mechanical_count: 0, is_installed: true,
/// #         is_renting: true, is_returning: true, location: None, bikes: vec![],
/// #     }
/// # }
/// let stations = vec![named("Gare du Nord"), named("Bastille")];
/// let found = search(stations, "gare");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Gare du Nord");
/// ```
pub fn search(stations: Vec<Station>, query: &str) -> Vec<Station> {
    if query.is_empty() {
        return stations;
    }

    let needle = query.to_lowercase();
    stations
        .into_iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect()
}

/// Find a station by its exact code.
pub fn find_by_code<'a>(stations: &'a [Station], code: &str) -> Option<&'a Station> {
    stations.iter().find(|s| s.code == code)
}
