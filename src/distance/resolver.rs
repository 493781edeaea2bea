//! Best-mode distance resolution.
//!
//! # Algorithm
//!
//! Both edge lists are first registered (road before rail, each edge's
//! `from` before its `to`) so the matrices cover every city mentioned
//! anywhere. Each list is then written into its own symmetric matrix, and
//! every ordered pair `(i, j)`, `i ≠ j`, picks the cheaper mode:
//!
//! | road | rail | chosen |
//! |------|------|--------|
//! | finite `r` | finite `t`, `r ≤ t` | road, `r` |
//! | finite `r` | finite `t`, `r > t` | rail, `t` |
//! | finite | ∞ | road |
//! | ∞ | finite | rail |
//! | ∞ | ∞ | none, ∞ |
//!
//! # Complexity
//!
//! O(n² + e) for n cities and e edges.

use log::debug;

use super::{DistanceMatrix, ModeMatrix, UNREACHABLE};
use crate::error::{RoutingError, RoutingResult};
use crate::models::{CityRegistry, EdgeRecord, TransportEdge, TransportMode};

/// Per-mode and merged matrices over one registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDistances {
    /// Road distances; unreachable where no road edge exists.
    pub road: DistanceMatrix,
    /// Rail distances; unreachable where no rail edge exists.
    pub rail: DistanceMatrix,
    /// Chosen mode per pair.
    pub best_mode: ModeMatrix,
    /// Distance of the chosen mode per pair.
    pub best_distance: DistanceMatrix,
}

/// Registers every city in both edge lists and builds the merged matrices.
///
/// Cities already in `registry` keep their indices. A repeated pair within
/// one list overrides the earlier distance.
///
/// # Errors
///
/// Returns [`RoutingError::DataLoad`] for a negative or non-finite distance.
/// The registry may already hold new cities when this happens.
///
/// # Examples
///
/// ```
/// use u_intercity::models::{CityRegistry, EdgeRecord, TransportMode};
/// use u_intercity::distance::resolve;
///
/// let mut reg = CityRegistry::new();
/// let road = vec![EdgeRecord::new("A", "B", 100.0)];
/// let rail = vec![EdgeRecord::new("A", "B", 80.0), EdgeRecord::new("B", "C", 50.0)];
/// let resolved = resolve(&mut reg, &road, &rail).unwrap();
/// assert_eq!(reg.size(), 3);
/// assert_eq!(resolved.best_mode.get(0, 1), Some(TransportMode::Rail));
/// assert_eq!(resolved.best_distance.get(0, 1), 80.0);
/// ```
pub fn resolve(
    registry: &mut CityRegistry,
    road: &[EdgeRecord],
    rail: &[EdgeRecord],
) -> RoutingResult<ResolvedDistances> {
    let road_edges = register_edges(registry, road, TransportMode::Road)?;
    let rail_edges = register_edges(registry, rail, TransportMode::Rail)?;

    let n = registry.size();
    let road = edge_matrix(n, &road_edges);
    let rail = edge_matrix(n, &rail_edges);
    let (best_mode, best_distance) = best_of(&road, &rail);

    debug!(
        "resolved {} cities from {} road and {} rail edges",
        n,
        road_edges.len(),
        rail_edges.len()
    );

    Ok(ResolvedDistances {
        road,
        rail,
        best_mode,
        best_distance,
    })
}

/// Merges two same-sized mode matrices into best-mode and best-distance
/// matrices.
///
/// Pure and deterministic: equal inputs give equal outputs.
///
/// # Panics
///
/// Panics if the matrices differ in size.
pub fn best_of(road: &DistanceMatrix, rail: &DistanceMatrix) -> (ModeMatrix, DistanceMatrix) {
    assert_eq!(road.size(), rail.size(), "mode matrices must match in size");
    let n = road.size();
    let mut modes = ModeMatrix::new(n);
    let mut best = DistanceMatrix::new(n);

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (mode, d) = pick(road.get(i, j), rail.get(i, j));
            modes.set(i, j, mode);
            best.set(i, j, d);
        }
    }
    (modes, best)
}

fn pick(road: f64, rail: f64) -> (Option<TransportMode>, f64) {
    match (road.is_finite(), rail.is_finite()) {
        (true, true) if road <= rail => (Some(TransportMode::Road), road),
        (true, true) => (Some(TransportMode::Rail), rail),
        (true, false) => (Some(TransportMode::Road), road),
        (false, true) => (Some(TransportMode::Rail), rail),
        (false, false) => (None, UNREACHABLE),
    }
}

fn register_edges(
    registry: &mut CityRegistry,
    records: &[EdgeRecord],
    mode: TransportMode,
) -> RoutingResult<Vec<TransportEdge>> {
    records
        .iter()
        .map(|r| {
            if !r.distance.is_finite() || r.distance < 0.0 {
                return Err(RoutingError::DataLoad(format!(
                    "invalid {} distance {} between {:?} and {:?}",
                    mode, r.distance, r.from, r.to
                )));
            }
            Ok(TransportEdge {
                from: registry.register(&r.from),
                to: registry.register(&r.to),
                mode,
                distance: r.distance,
            })
        })
        .collect()
}

fn edge_matrix(n: usize, edges: &[TransportEdge]) -> DistanceMatrix {
    let mut dm = DistanceMatrix::unreachable(n);
    for e in edges {
        if e.from != e.to {
            dm.set_symmetric(e.from, e.to, e.distance);
        }
    }
    dm
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_road() -> Vec<EdgeRecord> {
        vec![
            EdgeRecord::new("A", "B", 100.0),
            EdgeRecord::new("B", "C", 150.0),
            EdgeRecord::new("A", "C", 400.0),
        ]
    }

    #[test]
    fn test_road_only_equals_road_matrix() {
        let mut reg = CityRegistry::new();
        let r = resolve(&mut reg, &abc_road(), &[]).expect("valid");
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(r.best_distance.get(i, j), r.road.get(i, j));
                    assert_eq!(r.best_mode.get(i, j), Some(TransportMode::Road));
                }
            }
        }
    }

    #[test]
    fn test_rail_shortcut_wins() {
        let mut reg = CityRegistry::new();
        let rail = vec![EdgeRecord::new("A", "C", 90.0)];
        let r = resolve(&mut reg, &abc_road(), &rail).expect("valid");
        let (a, c) = (reg.lookup("A").unwrap(), reg.lookup("C").unwrap());
        assert_eq!(r.best_distance.get(a, c), 90.0);
        assert_eq!(r.best_mode.get(c, a), Some(TransportMode::Rail));
    }

    #[test]
    fn test_tie_goes_to_road() {
        let mut reg = CityRegistry::new();
        let road = vec![EdgeRecord::new("A", "B", 50.0)];
        let rail = vec![EdgeRecord::new("B", "A", 50.0)];
        let r = resolve(&mut reg, &road, &rail).expect("valid");
        assert_eq!(r.best_mode.get(0, 1), Some(TransportMode::Road));
        assert_eq!(r.best_mode.get(1, 0), Some(TransportMode::Road));
    }

    #[test]
    fn test_unconnected_pair() {
        let mut reg = CityRegistry::new();
        let road = vec![EdgeRecord::new("A", "B", 10.0)];
        let rail = vec![EdgeRecord::new("C", "D", 20.0)];
        let r = resolve(&mut reg, &road, &rail).expect("valid");
        assert_eq!(reg.size(), 4);
        assert_eq!(r.best_mode.get(0, 2), None);
        assert_eq!(r.best_distance.get(0, 2), UNREACHABLE);
        assert!(r.best_distance.is_symmetric(0.0));
    }

    #[test]
    fn test_rail_only_city_registered() {
        let mut reg = CityRegistry::new();
        reg.register("A");
        let rail = vec![EdgeRecord::new("A", "Z", 7.0)];
        resolve(&mut reg, &[], &rail).expect("valid");
        assert_eq!(reg.lookup("Z"), Some(1));
    }

    #[test]
    fn test_registry_preseeded_keeps_order() {
        let mut reg = CityRegistry::new();
        reg.register("C");
        resolve(&mut reg, &abc_road(), &[]).expect("valid");
        assert_eq!(reg.lookup("C"), Some(0));
        assert_eq!(reg.lookup("A"), Some(1));
        assert_eq!(reg.lookup("B"), Some(2));
    }

    #[test]
    fn test_duplicate_edge_last_wins() {
        let mut reg = CityRegistry::new();
        let road = vec![EdgeRecord::new("A", "B", 10.0), EdgeRecord::new("B", "A", 30.0)];
        let r = resolve(&mut reg, &road, &[]).expect("valid");
        assert_eq!(r.road.get(0, 1), 30.0);
    }

    #[test]
    fn test_negative_distance_rejected() {
        let mut reg = CityRegistry::new();
        let road = vec![EdgeRecord::new("A", "B", -1.0)];
        let err = resolve(&mut reg, &road, &[]).unwrap_err();
        assert!(matches!(err, RoutingError::DataLoad(_)));
    }

    #[test]
    fn test_nan_distance_rejected() {
        let mut reg = CityRegistry::new();
        let rail = vec![EdgeRecord::new("A", "B", f64::NAN)];
        assert!(resolve(&mut reg, &[], &rail).is_err());
    }

    #[test]
    fn test_best_of_idempotent() {
        let mut reg = CityRegistry::new();
        let rail = vec![EdgeRecord::new("A", "C", 90.0)];
        let r = resolve(&mut reg, &abc_road(), &rail).expect("valid");
        let first = best_of(&r.road, &r.rail);
        let second = best_of(&r.road, &r.rail);
        assert_eq!(first, second);
        assert_eq!(first.1, r.best_distance);
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut reg = CityRegistry::new();
        let road = vec![EdgeRecord::new("A", "A", 5.0)];
        let r = resolve(&mut reg, &road, &[]).expect("valid");
        assert_eq!(r.road.get(0, 0), 0.0);
    }
}
