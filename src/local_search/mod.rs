//! Local search operators for improving routes with fixed endpoints.
//!
//! - [`two_opt`] — 2-opt segment reversal
//! - [`or_opt`] — Segment relocation (lengths 1-3, optionally reversed)
//!
//! All operators are generic over [`ArcCost`] so guided local search can run
//! them on a penalty-augmented cost.

mod or_opt;
mod two_opt;

use std::time::Instant;

pub use or_opt::{or_opt_improve, or_opt_pass};
pub use two_opt::{two_opt_improve, two_opt_pass};

use crate::distance::ArcCost;

/// Minimum cost decrease for a move to count as an improvement.
pub(crate) const EPSILON: f64 = 1e-10;

/// Alternates 2-opt and Or-opt passes until neither improves the route or
/// the deadline passes. The deadline is checked before every pass.
///
/// Returns the number of passes run.
pub fn descend<C: ArcCost>(route: &mut Vec<usize>, costs: &C, deadline: Instant) -> usize {
    let mut passes = 0;
    while Instant::now() < deadline {
        passes += 1;
        let reversed = two_opt_pass(route, costs);
        let relocated = or_opt_pass(route, costs);
        if !reversed && !relocated {
            break;
        }
    }
    passes
}
