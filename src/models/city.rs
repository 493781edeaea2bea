//! City and registry types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A registered city.
///
/// The coordinate is optional: cities that appear only in an edge list are
/// registered without one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    id: usize,
    name: String,
    coordinate: Option<Coordinate>,
}

impl City {
    /// Dense zero-based index of this city.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Unique city name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of this city, if known.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

/// Assigns each city a stable, dense index in order of first registration.
///
/// There is no removal; indices stay valid for the registry's lifetime.
///
/// # Examples
///
/// ```
/// use u_intercity::models::CityRegistry;
///
/// let mut reg = CityRegistry::new();
/// assert_eq!(reg.register("Delhi"), 0);
/// assert_eq!(reg.register("Mumbai"), 1);
/// assert_eq!(reg.register("Delhi"), 0);
/// assert_eq!(reg.lookup("Mumbai"), Some(1));
/// assert_eq!(reg.size(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    cities: Vec<City>,
    index: HashMap<String, usize>,
}

impl CityRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `name`, registering it if unseen.
    pub fn register(&mut self, name: &str) -> usize {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.cities.len();
        self.cities.push(City {
            id,
            name: name.to_string(),
            coordinate: None,
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// Registers `name` and records its coordinate.
    ///
    /// A coordinate given for an already registered city is only stored if
    /// the city has none yet.
    pub fn register_with_coordinate(&mut self, name: &str, coordinate: Coordinate) -> usize {
        let id = self.register(name);
        let city = &mut self.cities[id];
        if city.coordinate.is_none() {
            city.coordinate = Some(coordinate);
        }
        id
    }

    /// Looks up the index of a city by name.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns the city at `id`.
    pub fn get(&self, id: usize) -> Option<&City> {
        self.cities.get(id)
    }

    /// Returns the name of the city at `id`.
    pub fn name(&self, id: usize) -> Option<&str> {
        self.cities.get(id).map(|c| c.name())
    }

    /// Returns the coordinate of a city by name.
    pub fn coordinate_of(&self, name: &str) -> Option<Coordinate> {
        self.lookup(name).and_then(|id| self.cities[id].coordinate)
    }

    /// Number of registered cities.
    pub fn size(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if no city is registered.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns all cities in index order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}
