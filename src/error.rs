//! Error types for network loading and route queries.

use thiserror::Error;

/// Errors reported by network construction and route solving.
///
/// Every error ends the current query; the network is never modified by a
/// failed request.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// A city name used as an endpoint is not registered.
    #[error("unknown city: {0:?}")]
    UnknownCity(String),

    /// An endpoint index is outside the registry.
    #[error("invalid endpoints: start={start}, end={end} with {size} registered cities")]
    InvalidEndpoints {
        /// Requested start index.
        start: usize,
        /// Requested end index.
        end: usize,
        /// Number of registered cities.
        size: usize,
    },

    /// An open path was requested between a city and itself.
    #[error("start and end are both {0:?}; request a tour for a closed route")]
    SameEndpoints(String),

    /// The construction phase could not produce a feasible route.
    #[error("no solution: {0}")]
    NoSolution(String),

    /// A solver setting is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed or missing input data.
    #[error("data load failure: {0}")]
    DataLoad(String),

    /// I/O error while reading a data source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error while reading a data source.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias used throughout the crate.
pub type RoutingResult<T> = Result<T, RoutingError>;
