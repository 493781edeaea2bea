//! CSV loaders.
//!
//! # CSV formats
//!
//! Coordinates, one row per city:
//!
//! ```csv
//! City,Latitude,Longitude
//! Delhi,28.6139,77.2090
//! ```
//!
//! Edges, one row per undirected pair (the reverse direction is implied):
//!
//! ```csv
//! From,To,Distance
//! Delhi,Agra,233
//! ```

use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::{RoutingError, RoutingResult};
use crate::models::{Coordinate, EdgeRecord, TransportMode};
use crate::network::{Network, NetworkBuilder};

/// One row of the coordinate source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityCoordinate {
    /// City name.
    #[serde(rename = "City")]
    pub name: String,
    /// Latitude in degrees.
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl CityCoordinate {
    /// The position of this row.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Loads city coordinates from a CSV file.
pub fn load_coordinates(path: &Path) -> RoutingResult<Vec<CityCoordinate>> {
    let file = std::fs::File::open(path)?;
    load_coordinates_reader(file)
}

/// Like [`load_coordinates`] but accepts any `Read` source.
///
/// # Examples
///
/// ```
/// use u_intercity::source::load_coordinates_reader;
///
/// let data = "City,Latitude,Longitude\nDelhi,28.61,77.21\n";
/// let rows = load_coordinates_reader(data.as_bytes()).unwrap();
/// assert_eq!(rows[0].name, "Delhi");
/// ```
pub fn load_coordinates_reader<R: Read>(reader: R) -> RoutingResult<Vec<CityCoordinate>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize::<CityCoordinate>() {
        let row = result?;
        if row.name.is_empty() {
            return Err(RoutingError::DataLoad("empty city name".into()));
        }
        if !row.latitude.is_finite() || !row.longitude.is_finite() {
            return Err(RoutingError::DataLoad(format!(
                "invalid coordinate for {:?}",
                row.name
            )));
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Loads an edge list from a CSV file.
pub fn load_edges(path: &Path) -> RoutingResult<Vec<EdgeRecord>> {
    let file = std::fs::File::open(path)?;
    load_edges_reader(file)
}

/// Like [`load_edges`] but accepts any `Read` source.
///
/// Distances are validated when the network is built, not here.
pub fn load_edges_reader<R: Read>(reader: R) -> RoutingResult<Vec<EdgeRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize::<EdgeRecord>() {
        let row = result?;
        if row.from.is_empty() || row.to.is_empty() {
            return Err(RoutingError::DataLoad("edge with empty city name".into()));
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Loads coordinates plus road and rail edge lists into a network.
///
/// # Errors
///
/// Any I/O, CSV or validation failure. No partial network is returned.
pub fn load_network(coordinates: &Path, road: &Path, rail: &Path) -> RoutingResult<Network> {
    let coords = load_coordinates(coordinates)?;
    info!("loaded coordinates for {} cities", coords.len());

    let mut builder = NetworkBuilder::new();
    for c in &coords {
        builder.add_city(&c.name, Some(c.coordinate()));
    }
    builder.add_edges(TransportMode::Road, load_edges(road)?);
    builder.add_edges(TransportMode::Rail, load_edges(rail)?);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_coordinates() {
        let data = "City,Latitude,Longitude\nDelhi, 28.61, 77.21\nMumbai,19.07,72.87\n";
        let rows = load_coordinates_reader(Cursor::new(data)).expect("valid");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Mumbai");
        assert!((rows[0].latitude - 28.61).abs() < 1e-10);
    }

    #[test]
    fn test_coordinates_bad_number() {
        let data = "City,Latitude,Longitude\nDelhi,north,77.21\n";
        let err = load_coordinates_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, RoutingError::Csv(_)));
    }

    #[test]
    fn test_coordinates_missing_column() {
        let data = "City,Latitude\nDelhi,28.61\n";
        assert!(load_coordinates_reader(Cursor::new(data)).is_err());
    }

    #[test]
    fn test_edges() {
        let data = "From,To,Distance\nDelhi,Agra,233\nAgra,Jaipur,240.5\n";
        let rows = load_edges_reader(Cursor::new(data)).expect("valid");
        assert_eq!(rows, vec![
            EdgeRecord::new("Delhi", "Agra", 233.0),
            EdgeRecord::new("Agra", "Jaipur", 240.5),
        ]);
    }

    #[test]
    fn test_edges_empty_name() {
        let data = "From,To,Distance\n,Agra,233\n";
        let err = load_edges_reader(Cursor::new(data)).unwrap_err();
        assert!(matches!(err, RoutingError::DataLoad(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_edges(Path::new("/nonexistent/edges.csv")).unwrap_err();
        assert!(matches!(err, RoutingError::Io(_)));
    }
}
