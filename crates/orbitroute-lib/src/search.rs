//! Depth-first enumeration of simple routes between two stations.

use std::collections::HashSet;

use serde::Serialize;

use crate::network::Network;

/// Default ceiling on the number of stations in any single route.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Simple route through the network, with the duration of each leg.
///
/// `legs[i]` is the duration of the connection taken from `stations[i]` to
/// `stations[i + 1]`, so `legs` is always one element shorter than
/// `stations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePath {
    pub stations: Vec<String>,
    pub legs: Vec<u32>,
}

impl RoutePath {
    /// Number of connections traversed.
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }

    /// Sum of the leg durations.
    pub fn total_duration(&self) -> u32 {
        self.legs.iter().sum()
    }

    /// Whether the route visits the given station.
    pub fn contains(&self, station: &str) -> bool {
        self.stations.iter().any(|s| s == station)
    }
}

/// Enumerate every simple route from `start` to `goal` holding at most
/// `max_depth` stations.
///
/// Unknown endpoints are not an error; they simply produce no routes. A
/// bound of zero produces no routes, and a bound of one admits only the
/// single-station route when `start == goal`. Reaching the goal records the
/// route and closes that branch. Sibling connections are explored in load
/// order, so enumeration order is deterministic; any final ordering is the
/// ranker's job.
///
/// All search state lives on the call stack, so independent searches over
/// the same network can run side by side.
pub fn enumerate_routes<'n>(
    network: &'n Network,
    start: &'n str,
    goal: &'n str,
    max_depth: usize,
) -> Vec<RoutePath> {
    let mut walker = Walker {
        network,
        goal,
        max_depth,
        stations: Vec::new(),
        legs: Vec::new(),
        visited: HashSet::new(),
        found: Vec::new(),
    };
    walker.visit(start);
    walker.found
}

/// Per-search traversal state. Recursion depth is bounded by `max_depth`, so
/// stack usage is bounded and predictable.
struct Walker<'n> {
    network: &'n Network,
    goal: &'n str,
    max_depth: usize,
    stations: Vec<&'n str>,
    legs: Vec<u32>,
    visited: HashSet<&'n str>,
    found: Vec<RoutePath>,
}

impl<'n> Walker<'n> {
    fn visit(&mut self, current: &'n str) {
        if self.stations.len() >= self.max_depth {
            return;
        }
        self.stations.push(current);

        if current == self.goal {
            self.record();
        } else {
            self.visited.insert(current);
            let network = self.network;
            for connection in network.neighbours(current) {
                if self.visited.contains(connection.to.as_str()) {
                    continue;
                }
                self.legs.push(connection.duration);
                self.visit(&connection.to);
                self.legs.pop();
            }
            self.visited.remove(current);
        }

        self.stations.pop();
    }

    fn record(&mut self) {
        self.found.push(RoutePath {
            stations: self.stations.iter().map(|s| s.to_string()).collect(),
            legs: self.legs.clone(),
        });
    }
}
