//! Orbitroute library entry points.
//!
//! This crate loads a network of orbital connections between named stations
//! from a flat record file, enumerates every simple route between two
//! stations under a depth bound, ranks the routes by total duration, and
//! reports which stations are reachable via more than one route. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod network;
pub mod output;
pub mod rank;
pub mod redundancy;
pub mod search;
pub mod survey;

pub use error::{Error, Result};
pub use network::{load_network, read_network, Connection, Network};
pub use output::{RouteLine, SurveySummary};
pub use rank::{best_route, rank_routes, RankedRoute};
pub use redundancy::{redundancy_report, visit_counts, StationRedundancy};
pub use search::{enumerate_routes, RoutePath, DEFAULT_MAX_DEPTH};
pub use survey::{run_survey, SurveyReport, SurveyRequest};
