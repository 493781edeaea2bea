//! Dense distance matrix.

use super::ArcCost;

/// Distance value for pairs with no connection.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A dense n×n distance matrix stored in row-major order.
///
/// Missing connections are stored as [`UNREACHABLE`]. The optimizer works on
/// a copy produced by [`DistanceMatrix::with_unreachable_cost`].
///
/// # Examples
///
/// ```
/// use u_intercity::distance::{DistanceMatrix, UNREACHABLE};
///
/// let mut dm = DistanceMatrix::unreachable(3);
/// dm.set_symmetric(0, 1, 100.0);
/// assert_eq!(dm.get(1, 0), 100.0);
/// assert_eq!(dm.get(0, 2), UNREACHABLE);
/// assert_eq!(dm.get(2, 2), 0.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a matrix where every off-diagonal pair is unreachable.
    pub fn unreachable(size: usize) -> Self {
        let mut dm = Self {
            data: vec![UNREACHABLE; size * size],
            size,
        };
        for i in 0..size {
            dm.set(i, i, 0.0);
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Sets both directions of a pair.
    pub fn set_symmetric(&mut self, a: usize, b: usize, distance: f64) {
        self.set(a, b, distance);
        self.set(b, a, distance);
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two unreachable entries compare equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns a copy with every non-finite entry replaced by `cost`.
    pub fn with_unreachable_cost(&self, cost: f64) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|&d| if d.is_finite() { d } else { cost })
                .collect(),
            size: self.size,
        }
    }
}

impl ArcCost for DistanceMatrix {
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }
}
