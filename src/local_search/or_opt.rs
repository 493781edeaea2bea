//! Or-opt improvement with fixed endpoints.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive cities to a different
//! position within the route, inserted either as-is or reversed. Accepts the
//! best move that reduces total cost. The first and last positions are
//! never part of a segment and never displaced.
//!
//! For each segment size k ∈ {1, 2, 3} and each starting position, computes
//! the cost change from removing the segment and reinserting it at every
//! other position.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::EPSILON;
use crate::distance::{sequence_cost, ArcCost};

/// Applies Or-opt improvement to a route until no improving move remains.
///
/// `route` is the full sequence including both fixed endpoints. Returns the
/// improved sequence and its total cost.
///
/// # Examples
///
/// ```
/// use u_intercity::distance::{sequence_cost, DistanceMatrix};
/// use u_intercity::local_search::or_opt_improve;
///
/// let mut dm = DistanceMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// // City 3 is out of place
/// let (improved, cost) = or_opt_improve(&[0, 3, 1, 2, 4], &dm);
/// assert_eq!(improved, vec![0, 1, 2, 3, 4]);
/// assert!(cost < sequence_cost(&[0, 3, 1, 2, 4], &dm));
/// ```
pub fn or_opt_improve<C: ArcCost>(route: &[usize], costs: &C) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    while or_opt_pass(&mut current, costs) {}
    let cost = sequence_cost(&current, costs);
    (current, cost)
}

/// One pass over segment lengths 1, 2 and 3. Returns `true` if improved.
pub fn or_opt_pass<C: ArcCost>(route: &mut Vec<usize>, costs: &C) -> bool {
    let mut improved = false;
    for seg_len in 1..=3 {
        if try_or_opt_move(route, costs, seg_len) {
            improved = true;
        }
    }
    improved
}

/// Finds and applies the best relocation for one segment length.
fn try_or_opt_move<C: ArcCost>(route: &mut Vec<usize>, costs: &C, seg_len: usize) -> bool {
    let n = route.len();
    // Interior must hold the segment plus at least one other city
    if n < seg_len + 3 {
        return false;
    }

    let mut best_delta = -EPSILON;
    let mut best: Option<(usize, usize, bool)> = None;

    for from in 1..=(n - 1 - seg_len) {
        let prev = route[from - 1];
        let after = route[from + seg_len];
        let seg_first = route[from];
        let seg_last = route[from + seg_len - 1];

        // Old edges: prev→seg_first + seg_last→after
        // New edge (after removal): prev→after
        let removal_gain = costs.cost(prev, seg_first) + costs.cost(seg_last, after)
            - costs.cost(prev, after);

        // Insert before route[to]
        for to in 1..n {
            if to >= from && to <= from + seg_len {
                continue;
            }
            let (ins_prev, ins_next) = (route[to - 1], route[to]);
            let base = costs.cost(ins_prev, ins_next);

            let forward = costs.cost(ins_prev, seg_first) + costs.cost(seg_last, ins_next) - base;
            let reversed = costs.cost(ins_prev, seg_last) + costs.cost(seg_first, ins_next) - base;

            for (insertion_cost, reverse) in [(forward, false), (reversed, true)] {
                let delta = insertion_cost - removal_gain;
                if delta < best_delta {
                    best_delta = delta;
                    best = Some((from, to, reverse));
                }
            }
        }
    }

    let Some((from, to, reverse)) = best else {
        return false;
    };

    let mut segment: Vec<usize> = route.drain(from..from + seg_len).collect();
    if reverse {
        segment.reverse();
    }
    let insert_pos = if to > from { to - seg_len } else { to };
    route.splice(insert_pos..insert_pos, segment);
    true
}
