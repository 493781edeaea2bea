//! Distance matrices and best-mode resolution.
//!
//! Provides dense per-mode and merged distance matrices, and the resolver
//! that collapses road and rail edge lists into a single best-mode view.

mod matrix;
mod mode_matrix;
mod resolver;

pub use matrix::{DistanceMatrix, UNREACHABLE};
pub use mode_matrix::ModeMatrix;
pub use resolver::{best_of, resolve, ResolvedDistances};

/// Cost of travelling along an arc, as seen by construction and local search.
///
/// Implemented by [`DistanceMatrix`] and by the penalty-augmented view used
/// during guided local search. Implementations must be symmetric.
pub trait ArcCost {
    /// Cost from `from` to `to`.
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// Sum of consecutive arc costs along `cities`.
pub fn sequence_cost<C: ArcCost + ?Sized>(cities: &[usize], costs: &C) -> f64 {
    cities.windows(2).map(|w| costs.cost(w[0], w[1])).sum()
}
