//! Orbital network store and flat-record loader.
//!
//! The network is built once from a comma-separated record file and treated
//! as read-only afterwards; searches borrow it immutably.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, Trim};

use crate::error::{Error, Result};

/// Directed connection leaving a station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Destination station name.
    pub to: String,
    /// Travel duration for this connection. Non-negative by construction.
    pub duration: u32,
}

/// Adjacency mapping from station name to its outgoing connections.
///
/// Stations are created implicitly the first time they appear as an origin;
/// destinations need not have an entry of their own. Parallel connections
/// between the same ordered pair are kept as distinct traversal options, and
/// per-origin order is load order.
#[derive(Debug, Clone, Default)]
pub struct Network {
    adjacency: HashMap<String, Vec<Connection>>,
}

impl Network {
    /// Outgoing connections for a station, in load order.
    ///
    /// Unknown stations, including pure sinks, yield an empty slice.
    pub fn neighbours(&self, station: &str) -> &[Connection] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of stations with an adjacency entry.
    pub fn origin_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of connections, parallel duplicates included.
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Every station mentioned anywhere in the network, sorted by name,
    /// paired with its outgoing-connection count.
    pub fn station_inventory(&self) -> Vec<(String, usize)> {
        let mut names: BTreeSet<&str> = BTreeSet::new();
        for (origin, connections) in &self.adjacency {
            names.insert(origin);
            for connection in connections {
                names.insert(&connection.to);
            }
        }
        names
            .into_iter()
            .map(|name| (name.to_string(), self.neighbours(name).len()))
            .collect()
    }

    /// Build a network from explicit `(origin, destination, duration)`
    /// triples. Mostly useful in tests.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, u32)>,
        S: Into<String>,
    {
        let mut adjacency: HashMap<String, Vec<Connection>> = HashMap::new();
        for (origin, to, duration) in edges {
            adjacency.entry(origin.into()).or_default().push(Connection {
                to: to.into(),
                duration,
            });
        }
        Self { adjacency }
    }
}

/// Load a network from a flat comma-separated record file.
///
/// Each record starts with an origin station name followed by repeating
/// `destination,duration` pairs, for example `Terra,Marte,5,Jupiter,12`.
pub fn load_network(path: &Path) -> Result<Network> {
    if !path.exists() {
        return Err(Error::NetworkNotFound {
            path: path.to_path_buf(),
        });
    }

    let started = Instant::now();
    let file = File::open(path)?;
    let network = read_network(file)?;
    tracing::debug!(
        stations = network.origin_count(),
        connections = network.connection_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded orbital network from {}",
        path.display()
    );
    Ok(network)
}

/// Read a network from any reader producing connection records.
///
/// A pair with an empty destination or a duration that does not parse as a
/// non-negative integer is skipped with a warning; the rest of the record
/// and the remaining records continue loading.
pub fn read_network<R: Read>(reader: R) -> Result<Network> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut adjacency: HashMap<String, Vec<Connection>> = HashMap::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = index + 1;

        let Some(origin) = record.get(0).filter(|field| !field.is_empty()) else {
            continue;
        };
        let connections = adjacency.entry(origin.to_string()).or_default();

        let mut fields = record.iter().skip(1);
        while let Some(to) = fields.next() {
            let Some(duration_field) = fields.next() else {
                tracing::warn!(line, origin, "destination without a duration; pair skipped");
                break;
            };
            if to.is_empty() {
                tracing::warn!(line, origin, "empty destination; pair skipped");
                continue;
            }
            match duration_field.parse::<u32>() {
                Ok(duration) => connections.push(Connection {
                    to: to.to_string(),
                    duration,
                }),
                Err(_) => {
                    tracing::warn!(
                        line,
                        origin,
                        destination = to,
                        duration = duration_field,
                        "invalid duration; pair skipped"
                    );
                }
            }
        }
    }

    Ok(Network { adjacency })
}
