//! Tabular data sources for coordinates and edge lists.
//!
//! - [`load_coordinates_reader`] — `City,Latitude,Longitude` rows
//! - [`load_edges_reader`] — `From,To,Distance` rows for one mode
//! - [`load_network`] — all three files into a [`Network`](crate::network::Network)

mod tabular;

pub use tabular::{
    load_coordinates, load_coordinates_reader, load_edges, load_edges_reader, load_network,
    CityCoordinate,
};
