//! Survey orchestration: enumerate, rank, and analyse in one call.

use std::time::Instant;

use crate::network::Network;
use crate::rank::{rank_routes, RankedRoute};
use crate::redundancy::{redundancy_report, StationRedundancy};
use crate::search::{enumerate_routes, DEFAULT_MAX_DEPTH};

/// Parameters for one survey between two stations.
#[derive(Debug, Clone)]
pub struct SurveyRequest {
    pub start: String,
    pub goal: String,
    /// Maximum number of stations permitted in any single route.
    pub max_depth: usize,
}

impl SurveyRequest {
    /// Request with the default depth bound of ten stations.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the depth bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Ranked routes and redundancy findings for one survey.
///
/// An empty `routes` list means no route exists under the depth bound; that
/// is an absence of results, never an error.
#[derive(Debug, Clone)]
pub struct SurveyReport {
    pub routes: Vec<RankedRoute>,
    pub redundancy: Vec<StationRedundancy>,
}

impl SurveyReport {
    /// Cheapest route, if any were found.
    pub fn best(&self) -> Option<&RankedRoute> {
        self.routes.first()
    }
}

/// Enumerate all simple routes for the request, rank them by total duration,
/// and compute the redundancy report over the same route set.
pub fn run_survey(network: &Network, request: &SurveyRequest) -> SurveyReport {
    let started = Instant::now();
    let paths = enumerate_routes(network, &request.start, &request.goal, request.max_depth);
    let redundancy = redundancy_report(&paths);
    let routes = rank_routes(paths);
    tracing::debug!(
        start = %request.start,
        goal = %request.goal,
        max_depth = request.max_depth,
        routes = routes.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "survey complete"
    );
    SurveyReport { routes, redundancy }
}
