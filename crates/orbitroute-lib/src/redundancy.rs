//! Station redundancy analysis over an enumerated route set.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::search::RoutePath;

/// Station reachable via more than one enumerated route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationRedundancy {
    pub station: String,
    pub routes: usize,
}

/// Count, per station, how many routes visit it.
///
/// A station is counted at most once per route, regardless of how often it
/// appears in that route's station sequence.
pub fn visit_counts(routes: &[RoutePath]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for route in routes {
        let distinct: HashSet<&str> = route.stations.iter().map(String::as_str).collect();
        for station in distinct {
            *counts.entry(station.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Stations visited by more than one route, sorted by name.
///
/// The filter is presentation policy; callers that need the complete picture
/// use [`visit_counts`] directly.
pub fn redundancy_report(routes: &[RoutePath]) -> Vec<StationRedundancy> {
    let mut report: Vec<StationRedundancy> = visit_counts(routes)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(station, routes)| StationRedundancy { station, routes })
        .collect();
    report.sort_by(|a, b| a.station.cmp(&b.station));
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(stations: &[&str], legs: &[u32]) -> RoutePath {
        RoutePath {
            stations: stations.iter().map(|s| s.to_string()).collect(),
            legs: legs.to_vec(),
        }
    }

    #[test]
    fn counts_cover_every_visited_station() {
        let routes = vec![path(&["A", "B", "C"], &[1, 2]), path(&["A", "C"], &[10])];
        let counts = visit_counts(&routes);
        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("B"), Some(&1));
        assert_eq!(counts.get("C"), Some(&2));
    }

    #[test]
    fn report_filters_single_visit_stations() {
        let routes = vec![path(&["A", "B", "C"], &[1, 2]), path(&["A", "C"], &[10])];
        let report = redundancy_report(&routes);
        assert_eq!(
            report,
            vec![
                StationRedundancy {
                    station: "A".to_string(),
                    routes: 2,
                },
                StationRedundancy {
                    station: "C".to_string(),
                    routes: 2,
                },
            ]
        );
    }

    #[test]
    fn empty_route_set_yields_empty_report() {
        assert!(redundancy_report(&[]).is_empty());
    }
}
