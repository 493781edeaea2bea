//! Route type.

use serde::Serialize;

/// Whether a route ends somewhere else or returns to its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteKind {
    /// Hamiltonian path between two distinct cities.
    Path,
    /// Closed tour; the start city appears at both ends.
    Tour,
}

/// An ordered sequence of city indices produced by the solver.
///
/// A [`RouteKind::Path`] over `n` cities has length `n`; a
/// [`RouteKind::Tour`] has length `n + 1` because the start is repeated at
/// the end.
///
/// # Examples
///
/// ```
/// use u_intercity::models::{Route, RouteKind};
///
/// let route = Route::new(RouteKind::Path, vec![0, 2, 1], 250.0);
/// assert_eq!(route.start(), Some(0));
/// assert_eq!(route.end(), Some(1));
/// assert_eq!(route.num_segments(), 2);
/// assert!(route.visits_all(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    kind: RouteKind,
    cities: Vec<usize>,
    total_distance: f64,
}

impl Route {
    /// Creates a route from a full city sequence including both endpoints.
    pub fn new(kind: RouteKind, cities: Vec<usize>, total_distance: f64) -> Self {
        Self {
            kind,
            cities,
            total_distance,
        }
    }

    /// Path or tour.
    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    /// City indices in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Consumes the route, returning the city sequence.
    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }

    /// First city.
    pub fn start(&self) -> Option<usize> {
        self.cities.first().copied()
    }

    /// Last city.
    pub fn end(&self) -> Option<usize> {
        self.cities.last().copied()
    }

    /// Number of entries in the sequence.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of consecutive pairs.
    pub fn num_segments(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// Total distance under the cost matrix the solver optimized.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Returns `true` if every city in `0..num_cities` appears exactly once,
    /// except the repeated start of a tour.
    pub fn visits_all(&self, num_cities: usize) -> bool {
        let body = match self.kind {
            RouteKind::Path => &self.cities[..],
            RouteKind::Tour => {
                if self.cities.len() < 2 || self.start() != self.end() {
                    return false;
                }
                &self.cities[..self.cities.len() - 1]
            }
        };
        if body.len() != num_cities {
            return false;
        }
        let mut seen = vec![false; num_cities];
        for &c in body {
            if c >= num_cities || seen[c] {
                return false;
            }
            seen[c] = true;
        }
        true
    }
}
