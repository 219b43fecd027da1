use std::fmt::Write;

use serde::Serialize;

use crate::rank::RankedRoute;
use crate::redundancy::StationRedundancy;
use crate::survey::{SurveyReport, SurveyRequest};

/// One ranked route prepared for presentation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteLine {
    /// Position in the ranking, starting at 1.
    pub rank: usize,
    pub stations: Vec<String>,
    pub legs: Vec<u32>,
    pub total_duration: u32,
}

impl RouteLine {
    /// `Terra -> (5) Marte -> (3) Jupiter` style listing of the route.
    pub fn display_route(&self) -> String {
        let mut text = String::new();
        for (index, station) in self.stations.iter().enumerate() {
            if index > 0 {
                let _ = write!(text, " -> ({}) ", self.legs[index - 1]);
            }
            text.push_str(station);
        }
        text
    }
}

/// Structured survey result that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SurveySummary {
    pub start: String,
    pub goal: String,
    pub max_depth: usize,
    pub routes: Vec<RouteLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<RouteLine>,
    pub redundancy: Vec<StationRedundancy>,
}

impl SurveySummary {
    /// Convert a [`SurveyReport`] into a presentation-ready summary.
    pub fn from_report(request: &SurveyRequest, report: &SurveyReport) -> Self {
        let routes: Vec<RouteLine> = report
            .routes
            .iter()
            .enumerate()
            .map(|(index, ranked)| route_line(index, ranked))
            .collect();
        let best = routes.first().cloned();

        Self {
            start: request.start.clone(),
            goal: request.goal.clone(),
            max_depth: request.max_depth,
            routes,
            best,
            redundancy: report.redundancy.clone(),
        }
    }

    /// Render the summary as plain text.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();

        if self.routes.is_empty() {
            let _ = writeln!(
                buffer,
                "No route found between {} and {}.",
                self.start, self.goal
            );
            return buffer;
        }

        let _ = writeln!(
            buffer,
            "Routes from {} to {} (max {} stations):",
            self.start, self.goal, self.max_depth
        );
        for route in &self.routes {
            let _ = writeln!(
                buffer,
                "{:>3}: {} (total {})",
                route.rank,
                route.display_route(),
                route.total_duration
            );
        }

        if let Some(best) = &self.best {
            let _ = writeln!(buffer);
            let _ = writeln!(
                buffer,
                "Best route: {} (total {})",
                best.display_route(),
                best.total_duration
            );
        }

        if !self.redundancy.is_empty() {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "Redundant stations:");
            for entry in &self.redundancy {
                let _ = writeln!(
                    buffer,
                    " - {} reachable via {} routes",
                    entry.station, entry.routes
                );
            }
        }

        buffer
    }
}

fn route_line(index: usize, ranked: &RankedRoute) -> RouteLine {
    RouteLine {
        rank: index + 1,
        stations: ranked.route.stations.clone(),
        legs: ranked.route.legs.clone(),
        total_duration: ranked.total_duration,
    }
}
