//! Path-cheapest-arc constructive heuristic.
//!
//! Builds the route greedily: starting from the fixed start city, always
//! extend the path to the unvisited city reachable by the cheapest arc from
//! the current tail. The fixed end city is appended last.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! This is the nearest-neighbor rule with the end city held back. Solution
//! quality is typically 15-25% above optimal, which local search then closes.

use crate::distance::ArcCost;

/// Constructs a route over cities `0..n` using the path-cheapest-arc rule.
///
/// Returns the full sequence including both endpoints. When `start == end`
/// the result is a closed tour of length `n + 1`; otherwise an open path of
/// length `n`. Ties go to the lower city index.
///
/// Returns `None` if an endpoint is out of range, or a tour is requested
/// over fewer than two cities.
///
/// # Examples
///
/// ```
/// use u_intercity::distance::DistanceMatrix;
/// use u_intercity::constructive::path_cheapest_arc;
///
/// let mut dm = DistanceMatrix::unreachable(3);
/// dm.set_symmetric(0, 1, 100.0);
/// dm.set_symmetric(1, 2, 150.0);
/// dm.set_symmetric(0, 2, 400.0);
///
/// let route = path_cheapest_arc(3, 0, 2, &dm).unwrap();
/// assert_eq!(route, vec![0, 1, 2]);
/// ```
pub fn path_cheapest_arc<C: ArcCost>(
    n: usize,
    start: usize,
    end: usize,
    costs: &C,
) -> Option<Vec<usize>> {
    if start >= n || end >= n || (start == end && n < 2) {
        return None;
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    visited[end] = true;

    let mut route = Vec::with_capacity(n + 1);
    route.push(start);
    let mut current = start;

    loop {
        let mut best: Option<(usize, f64)> = None;
        for (c, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = costs.cost(current, c);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((c, d)),
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                route.push(next);
                current = next;
            }
            None => break,
        }
    }

    route.push(end);
    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

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
    fn test_pca_line_path() {
        let dm = line_matrix(4);
        assert_eq!(path_cheapest_arc(4, 0, 3, &dm), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_pca_end_held_back() {
        let dm = line_matrix(4);
        // 1 is nearest to 0 but is the end, so it must come last
        assert_eq!(path_cheapest_arc(4, 0, 1, &dm), Some(vec![0, 2, 3, 1]));
    }

    #[test]
    fn test_pca_tour() {
        let dm = line_matrix(3);
        let route = path_cheapest_arc(3, 1, 1, &dm).expect("feasible");
        assert_eq!(route.len(), 4);
        assert_eq!(route[0], 1);
        assert_eq!(route[3], 1);
        // tie between 0 and 2 goes to 0
        assert_eq!(route, vec![1, 0, 2, 1]);
    }

    #[test]
    fn test_pca_two_city_path() {
        let dm = line_matrix(2);
        assert_eq!(path_cheapest_arc(2, 1, 0, &dm), Some(vec![1, 0]));
    }

    #[test]
    fn test_pca_infeasible() {
        let dm = line_matrix(1);
        assert_eq!(path_cheapest_arc(1, 0, 0, &dm), None);
        assert_eq!(path_cheapest_arc(1, 0, 1, &dm), None);
    }

    #[test]
    fn test_pca_through_unreachable() {
        let mut dm = DistanceMatrix::unreachable(3);
        dm.set_symmetric(0, 1, 1.0);
        let dm = dm.with_unreachable_cost(999_999.0);
        let route = path_cheapest_arc(3, 0, 2, &dm).expect("feasible");
        assert_eq!(route, vec![0, 1, 2]);
    }
}
