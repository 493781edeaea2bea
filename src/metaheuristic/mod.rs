//! Metaheuristics that drive local search under a time budget.
//!
//! - [`GuidedLocalSearch`] — Penalty-guided local search (Voudouris & Tsang, 1999)

mod guided;

pub use guided::{GuidedLocalSearch, SearchOutcome};
