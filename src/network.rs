//! Immutable multimodal network.
//!
//! A [`Network`] is built once by [`NetworkBuilder`] and then shared by
//! reference with the solver and report builder for any number of queries.

use log::info;

use crate::distance::{resolve, DistanceMatrix, ModeMatrix, ResolvedDistances};
use crate::error::{RoutingError, RoutingResult};
use crate::models::{CityRegistry, Coordinate, EdgeRecord, TransportMode};

/// Collects cities and per-mode edges, then resolves them into a [`Network`].
///
/// Cities given with coordinates are registered first, in insertion order;
/// cities only mentioned by edges follow (road edges before rail edges).
///
/// # Examples
///
/// ```
/// use u_intercity::network::NetworkBuilder;
/// use u_intercity::models::{Coordinate, TransportMode};
///
/// let network = NetworkBuilder::new()
///     .city("A", Coordinate::new(28.6, 77.2))
///     .edge(TransportMode::Road, "A", "B", 100.0)
///     .edge(TransportMode::Rail, "A", "B", 90.0)
///     .build()
///     .unwrap();
/// assert_eq!(network.size(), 2);
/// assert_eq!(network.best_distance().get(0, 1), 90.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    registry: CityRegistry,
    road: Vec<EdgeRecord>,
    rail: Vec<EdgeRecord>,
}

impl NetworkBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a city with its coordinate.
    pub fn city(mut self, name: &str, coordinate: Coordinate) -> Self {
        self.add_city(name, Some(coordinate));
        self
    }

    /// Adds an edge in the given mode.
    pub fn edge(mut self, mode: TransportMode, from: &str, to: &str, distance: f64) -> Self {
        self.add_edge(mode, EdgeRecord::new(from, to, distance));
        self
    }

    /// Registers a city, with or without a coordinate.
    pub fn add_city(&mut self, name: &str, coordinate: Option<Coordinate>) -> usize {
        match coordinate {
            Some(c) => self.registry.register_with_coordinate(name, c),
            None => self.registry.register(name),
        }
    }

    /// Adds one edge in the given mode.
    pub fn add_edge(&mut self, mode: TransportMode, edge: EdgeRecord) {
        match mode {
            TransportMode::Road => self.road.push(edge),
            TransportMode::Rail => self.rail.push(edge),
        }
    }

    /// Adds every edge of an edge source in the given mode.
    pub fn add_edges<I>(&mut self, mode: TransportMode, edges: I)
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        for e in edges {
            self.add_edge(mode, e);
        }
    }

    /// Resolves all edges into an immutable network.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::DataLoad`] for an invalid edge distance.
    pub fn build(self) -> RoutingResult<Network> {
        let NetworkBuilder {
            mut registry,
            road,
            rail,
        } = self;
        let distances = resolve(&mut registry, &road, &rail)?;
        info!(
            "built network: {} cities, {} road edges, {} rail edges",
            registry.size(),
            road.len(),
            rail.len()
        );
        Ok(Network {
            registry,
            distances,
        })
    }
}

/// Registry plus resolved matrices; read-only after construction.
#[derive(Debug, Clone)]
pub struct Network {
    registry: CityRegistry,
    distances: ResolvedDistances,
}

impl Network {
    /// The city registry.
    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    /// Number of registered cities.
    pub fn size(&self) -> usize {
        self.registry.size()
    }

    /// Index of a city by name.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::UnknownCity`] if the name is not registered.
    pub fn city_index(&self, name: &str) -> RoutingResult<usize> {
        self.registry
            .lookup(name)
            .ok_or_else(|| RoutingError::UnknownCity(name.to_string()))
    }

    /// Name of the city at `id`.
    pub fn city_name(&self, id: usize) -> Option<&str> {
        self.registry.name(id)
    }

    /// Maps a sequence of indices to city names.
    pub fn city_names(&self, ids: &[usize]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.city_name(id).map(str::to_string))
            .collect()
    }

    /// Distances of one transport mode.
    pub fn mode_distances(&self, mode: TransportMode) -> &DistanceMatrix {
        match mode {
            TransportMode::Road => &self.distances.road,
            TransportMode::Rail => &self.distances.rail,
        }
    }

    /// Chosen mode per city pair.
    pub fn best_mode(&self) -> &ModeMatrix {
        &self.distances.best_mode
    }

    /// Distance of the chosen mode per city pair.
    pub fn best_distance(&self) -> &DistanceMatrix {
        &self.distances.best_distance
    }
}
