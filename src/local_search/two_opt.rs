//! 2-opt improvement with fixed endpoints.
//!
//! # Algorithm
//!
//! For each pair of edges (i-1, i) and (j, j+1) in a route, compute the
//! change in cost from reversing the segment between them:
//!
//! ```text
//! delta = d(r[i-1], r[j]) + d(r[i], r[j+1]) - d(r[i-1], r[i]) - d(r[j], r[j+1])
//! ```
//!
//! If delta < 0, reverse the segment [i..=j] and accept the improvement.
//! Positions 0 and n-1 are never moved, so the route keeps its start and end.
//! Repeat until no further improvements are found (first-improvement strategy).
//! Costs must be symmetric for the reversed segment's interior to keep its cost.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::EPSILON;
use crate::distance::{sequence_cost, ArcCost};

/// Applies 2-opt improvement to a route until no improving move remains.
///
/// `route` is the full sequence including both fixed endpoints. Returns the
/// improved sequence and its total cost.
///
/// # Examples
///
/// ```
/// use u_intercity::distance::DistanceMatrix;
/// use u_intercity::local_search::two_opt_improve;
///
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// // Suboptimal order: 0, 2, 1, 3
/// let (improved, cost) = two_opt_improve(&[0, 2, 1, 3], &dm);
/// assert_eq!(improved, vec![0, 1, 2, 3]);
/// assert!((cost - 3.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve<C: ArcCost>(route: &[usize], costs: &C) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    while two_opt_pass(&mut current, costs) {}
    let cost = sequence_cost(&current, costs);
    (current, cost)
}

/// One first-improvement sweep over all segment pairs.
///
/// Returns `true` if at least one reversal was applied.
pub fn two_opt_pass<C: ArcCost>(route: &mut [usize], costs: &C) -> bool {
    let n = route.len();
    if n < 4 {
        return false;
    }

    let mut improved = false;
    for i in 1..n - 2 {
        for j in i + 1..n - 1 {
            if two_opt_delta(route, costs, i, j) < -EPSILON {
                route[i..=j].reverse();
                improved = true;
            }
        }
    }
    improved
}

/// Computes the cost change from reversing `route[i..=j]`.
///
/// Before: ...-route[i-1] - route[i] - ... - route[j] - route[j+1]-...
/// After:  ...-route[i-1] - route[j] - ... - route[i] - route[j+1]-...
fn two_opt_delta<C: ArcCost>(route: &[usize], costs: &C, i: usize, j: usize) -> f64 {
    let (prev, next) = (route[i - 1], route[j + 1]);
    let old_cost = costs.cost(prev, route[i]) + costs.cost(route[j], next);
    let new_cost = costs.cost(prev, route[j]) + costs.cost(route[i], next);
    new_cost - old_cost
}
