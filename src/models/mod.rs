//! Domain model types for intercity route planning.
//!
//! Provides the core abstractions: cities with a stable registry index,
//! transport modes and edges, and routes as ordered sequences of cities.

mod city;
mod mode;
mod route;

pub use city::{City, CityRegistry, Coordinate};
pub use mode::{EdgeRecord, TransportEdge, TransportMode};
pub use route::{Route, RouteKind};
