//! Transport mode and edge types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A transport network connecting cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Road network.
    Road,
    /// Railway network.
    Rail,
}

impl TransportMode {
    /// Lowercase label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Road => "road",
            TransportMode::Rail => "rail",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named edge as read from an edge source: `(from, to, distance)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Name of one endpoint.
    #[serde(rename = "From")]
    pub from: String,
    /// Name of the other endpoint.
    #[serde(rename = "To")]
    pub to: String,
    /// Non-negative distance in kilometres.
    #[serde(rename = "Distance")]
    pub distance: f64,
}

impl EdgeRecord {
    /// Creates an edge record.
    pub fn new(from: &str, to: &str, distance: f64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        }
    }
}

/// An undirected edge between two registered cities in one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportEdge {
    /// Index of one endpoint.
    pub from: usize,
    /// Index of the other endpoint.
    pub to: usize,
    /// Network this edge belongs to.
    pub mode: TransportMode,
    /// Non-negative distance.
    pub distance: f64,
}
