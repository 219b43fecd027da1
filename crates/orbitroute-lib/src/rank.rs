//! Ranking of enumerated routes by total duration.

use serde::Serialize;

use crate::search::RoutePath;

/// Route paired with the sum of its leg durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedRoute {
    pub route: RoutePath,
    pub total_duration: u32,
}

/// Sort routes ascending by total duration.
///
/// The sort is stable: routes with equal totals keep their enumeration
/// order, with no secondary key.
pub fn rank_routes(routes: Vec<RoutePath>) -> Vec<RankedRoute> {
    let mut ranked: Vec<RankedRoute> = routes
        .into_iter()
        .map(|route| {
            let total_duration = route.total_duration();
            RankedRoute {
                route,
                total_duration,
            }
        })
        .collect();
    ranked.sort_by_key(|entry| entry.total_duration);
    ranked
}

/// Cheapest route, if any were found.
pub fn best_route(ranked: &[RankedRoute]) -> Option<&RankedRoute> {
    ranked.first()
}
