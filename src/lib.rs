//! # u-intercity
//!
//! Multimodal intercity route planning: merges road and rail distance
//! networks into a best-mode graph and solves the open-path (or closed-tour)
//! traveling salesman problem over it under a time budget.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, CityRegistry, TransportMode, Route)
//! - [`distance`] — Distance and best-mode matrices, road/rail resolution
//! - [`network`] — Immutable network built once and shared across queries
//! - [`source`] — CSV loaders for coordinates and edge lists
//! - [`constructive`] — Construction heuristics with fixed endpoints
//! - [`local_search`] — Local search operators (2-opt, Or-opt)
//! - [`metaheuristic`] — Time-bounded guided local search
//! - [`solver`] — Endpoint validation and the query interface
//! - [`report`] — Per-segment and aggregate route statistics
//! - [`config`] — Solver configuration
//! - [`error`] — Error types

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod metaheuristic;
pub mod models;
pub mod network;
pub mod report;
pub mod solver;
pub mod source;

pub use error::{RoutingError, RoutingResult};
