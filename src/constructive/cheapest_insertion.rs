//! Cheapest-insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Start from the bare path `start → end`. At every step, for each unvisited
//! city `c` and each consecutive pair `(a, b)` in the partial path, evaluate
//!
//! ```text
//! delta = d(a, c) + d(c, b) - d(a, b)
//! ```
//!
//! and insert the city with the globally smallest delta at its best position.
//!
//! # Complexity
//!
//! O(n²) per insertion, O(n³) overall.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM J. Comput.*
//! 6(3), 563-581.

use crate::distance::ArcCost;

/// Constructs a route over cities `0..n` by cheapest insertion.
///
/// Same endpoint conventions and failure cases as
/// [`path_cheapest_arc`](super::path_cheapest_arc).
///
/// # Examples
///
/// ```
/// use u_intercity::distance::DistanceMatrix;
/// use u_intercity::constructive::cheapest_insertion;
///
/// let mut dm = DistanceMatrix::unreachable(3);
/// dm.set_symmetric(0, 1, 100.0);
/// dm.set_symmetric(1, 2, 150.0);
/// dm.set_symmetric(0, 2, 400.0);
///
/// assert_eq!(cheapest_insertion(3, 0, 2, &dm), Some(vec![0, 1, 2]));
/// ```
pub fn cheapest_insertion<C: ArcCost>(
    n: usize,
    start: usize,
    end: usize,
    costs: &C,
) -> Option<Vec<usize>> {
    if start >= n || end >= n || (start == end && n < 2) {
        return None;
    }

    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != start && c != end).collect();
    let mut route = Vec::with_capacity(n + 1);
    route.push(start);
    route.push(end);

    while !unvisited.is_empty() {
        // (index into unvisited, insert position, delta)
        let mut best: Option<(usize, usize, f64)> = None;
        for (ui, &c) in unvisited.iter().enumerate() {
            for pos in 1..route.len() {
                let (a, b) = (route[pos - 1], route[pos]);
                let delta = costs.cost(a, c) + costs.cost(c, b) - costs.cost(a, b);
                match best {
                    Some((_, _, bd)) if delta >= bd => {}
                    _ => best = Some((ui, pos, delta)),
                }
            }
        }

        let Some((ui, pos, _)) = best else { break };
        let city = unvisited.remove(ui);
        route.insert(pos, city);
    }

    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{sequence_cost, DistanceMatrix};

    fn line_matrix(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_ci_line_path() {
        let dm = line_matrix(5);
        let route = cheapest_insertion(5, 0, 4, &dm).expect("feasible");
        assert_eq!(route, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_ci_beats_greedy_trap() {
        // 1 is a detour off the 0 → 3 corridor; insertion puts it where it costs least
        let dm = line_matrix(4);
        let route = cheapest_insertion(4, 0, 1, &dm).expect("feasible");
        assert_eq!(route[0], 0);
        assert_eq!(route[3], 1);
        assert!((sequence_cost(&route, &dm) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_ci_tour() {
        let dm = line_matrix(4);
        let route = cheapest_insertion(4, 0, 0, &dm).expect("feasible");
        assert_eq!(route.len(), 5);
        assert_eq!(route.first(), Some(&0));
        assert_eq!(route.last(), Some(&0));
        assert!((sequence_cost(&route, &dm) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_ci_infeasible() {
        let dm = line_matrix(1);
        assert_eq!(cheapest_insertion(1, 0, 0, &dm), None);
        assert_eq!(cheapest_insertion(2, 0, 5, &line_matrix(2)), None);
    }
}
