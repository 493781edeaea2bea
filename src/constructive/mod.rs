//! Constructive heuristics for building an initial route with fixed endpoints.
//!
//! - [`path_cheapest_arc`] — Greedy tail extension by cheapest arc, O(n²)
//! - [`cheapest_insertion`] — Cheapest insertion (Rosenkrantz et al., 1977), O(n³)

mod cheapest_insertion;
mod path_cheapest_arc;

pub use cheapest_insertion::cheapest_insertion;
pub use path_cheapest_arc::path_cheapest_arc;

use crate::config::FirstSolutionStrategy;
use crate::distance::ArcCost;

/// Runs the construction heuristic selected by `strategy`.
pub fn construct<C: ArcCost>(
    strategy: FirstSolutionStrategy,
    n: usize,
    start: usize,
    end: usize,
    costs: &C,
) -> Option<Vec<usize>> {
    match strategy {
        FirstSolutionStrategy::PathCheapestArc => path_cheapest_arc(n, start, end, costs),
        FirstSolutionStrategy::CheapestInsertion => cheapest_insertion(n, start, end, costs),
    }
}
