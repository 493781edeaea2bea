//! Guided local search over fixed-endpoint routes.
//!
//! # Algorithm
//!
//! 1. Descend from the initial route with 2-opt and Or-opt on the true cost.
//! 2. Repeat until the deadline (or iteration cap):
//!    - For every arc `(a, b)` of the current route compute the utility
//!      `d(a, b) / (1 + p(a, b))` and increment the penalty `p` of the
//!      arcs with maximal utility.
//!    - Descend again on the augmented cost `d(a, b) + λ·p(a, b)`, where
//!      `λ = α · (first local optimum cost / number of arcs)`.
//!    - Keep the route if its true cost beats the best so far.
//!    - After `restart_after` rounds with no new best, clear all penalties and
//!      restart from a perturbed copy of the best route (double bridge, or a
//!      random reversal on short routes).
//!
//! The best route never gets worse than the initial one, so the result is
//! always at most the construction cost.
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its application
//! to the traveling salesman problem", *European Journal of Operational
//! Research* 113(2), 469-499.

use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SolverConfig;
use crate::distance::{sequence_cost, ArcCost, DistanceMatrix};
use crate::local_search::{descend, EPSILON};

/// Result of a guided local search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best route found, with the same endpoints as the initial route.
    pub best: Vec<usize>,
    /// True cost of `best`.
    pub best_cost: f64,
    /// True cost of the initial route.
    pub initial_cost: f64,
    /// Penalty rounds completed.
    pub iterations: usize,
    /// Penalty resets with perturbation.
    pub restarts: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Penalty counts per arc, kept symmetric.
#[derive(Debug, Clone)]
struct Penalties {
    counts: Vec<u32>,
    size: usize,
}

impl Penalties {
    fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size * size],
            size,
        }
    }

    fn get(&self, a: usize, b: usize) -> u32 {
        self.counts[a * self.size + b]
    }

    fn bump(&mut self, a: usize, b: usize) {
        self.counts[a * self.size + b] += 1;
        if a != b {
            self.counts[b * self.size + a] += 1;
        }
    }

    fn clear(&mut self) {
        self.counts.fill(0);
    }

    /// Penalizes the arcs of `route` with maximal utility.
    fn penalize(&mut self, route: &[usize], costs: &DistanceMatrix) -> usize {
        let targets: Vec<(usize, usize)> = {
            let this = &*self;
            let utility = |a: usize, b: usize| costs.get(a, b) / (1.0 + this.get(a, b) as f64);
            let max = route
                .windows(2)
                .map(|w| utility(w[0], w[1]))
                .fold(f64::NEG_INFINITY, f64::max);
            route
                .windows(2)
                .filter(|w| utility(w[0], w[1]) >= max - EPSILON)
                .map(|w| (w[0], w[1]))
                .collect()
        };
        for &(a, b) in &targets {
            self.bump(a, b);
        }
        targets.len()
    }
}

/// Base cost plus weighted arc penalties.
struct AugmentedCost<'a> {
    base: &'a DistanceMatrix,
    penalties: &'a Penalties,
    lambda: f64,
}

impl ArcCost for AugmentedCost<'_> {
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.base.get(from, to) + self.lambda * self.penalties.get(from, to) as f64
    }
}

/// Time-bounded guided local search.
///
/// Runs in the calling thread and polls the deadline between local search
/// passes, so it returns shortly after the deadline passes.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use u_intercity::config::SolverConfig;
/// use u_intercity::distance::DistanceMatrix;
/// use u_intercity::metaheuristic::GuidedLocalSearch;
///
/// let mut dm = DistanceMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let config = SolverConfig::default().with_max_iterations(20);
/// let gls = GuidedLocalSearch::new(&config);
/// let out = gls.run(&dm, vec![0, 3, 1, 2, 4], Instant::now() + Duration::from_secs(1));
/// assert_eq!(out.best, vec![0, 1, 2, 3, 4]);
/// assert!(out.best_cost <= out.initial_cost);
/// ```
#[derive(Debug, Clone)]
pub struct GuidedLocalSearch {
    penalty_factor: f64,
    restart_after: usize,
    max_iterations: Option<usize>,
    seed: u64,
}

impl GuidedLocalSearch {
    /// Takes the search parameters from a solver configuration.
    ///
    /// The configuration is expected to pass [`SolverConfig::validate`].
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            penalty_factor: config.penalty_factor,
            restart_after: config.restart_after,
            max_iterations: config.max_iterations,
            seed: config.seed,
        }
    }

    /// Improves `initial` under `costs` until `deadline`.
    ///
    /// `costs` must be finite; `initial` is a full route whose first and last
    /// entries stay fixed.
    pub fn run(
        &self,
        costs: &DistanceMatrix,
        initial: Vec<usize>,
        deadline: Instant,
    ) -> SearchOutcome {
        let started = Instant::now();
        let initial_cost = sequence_cost(&initial, costs);
        let mut outcome = SearchOutcome {
            best: initial.clone(),
            best_cost: initial_cost,
            initial_cost,
            iterations: 0,
            restarts: 0,
            elapsed: Duration::ZERO,
        };

        // Fewer than two interior cities leaves nothing to rearrange
        if initial.len() < 4 {
            outcome.elapsed = started.elapsed();
            return outcome;
        }

        let mut current = initial;
        descend(&mut current, costs, deadline);
        let local_cost = sequence_cost(&current, costs);
        self.record(&mut outcome, &current, local_cost);

        // A zero-cost local optimum would disable penalties; weigh them at 1
        let lambda = {
            let l = self.penalty_factor * local_cost / (current.len() - 1) as f64;
            if l > 0.0 && l.is_finite() {
                l
            } else {
                1.0
            }
        };

        let mut penalties = Penalties::new(costs.size());
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut stall = 0;

        while Instant::now() < deadline
            && self.max_iterations.map_or(true, |m| outcome.iterations < m)
        {
            outcome.iterations += 1;
            let penalized = penalties.penalize(&current, costs);

            let augmented = AugmentedCost {
                base: costs,
                penalties: &penalties,
                lambda,
            };
            descend(&mut current, &augmented, deadline);

            let cost = sequence_cost(&current, costs);
            trace!(
                "gls round {}: penalized {} arcs, cost {:.1}",
                outcome.iterations,
                penalized,
                cost
            );
            if self.record(&mut outcome, &current, cost) {
                stall = 0;
            } else {
                stall += 1;
            }

            if self.restart_after > 0 && stall >= self.restart_after {
                outcome.restarts += 1;
                stall = 0;
                penalties.clear();
                current.clone_from(&outcome.best);
                perturb(&mut current, &mut rng);
                descend(&mut current, costs, deadline);
                let cost = sequence_cost(&current, costs);
                self.record(&mut outcome, &current, cost);
                debug!(
                    "gls restart {} after round {}, best {:.1}",
                    outcome.restarts, outcome.iterations, outcome.best_cost
                );
            }
        }

        outcome.elapsed = started.elapsed();
        outcome
    }

    /// Stores `route` if it beats the best so far. Returns `true` if stored.
    fn record(&self, outcome: &mut SearchOutcome, route: &[usize], cost: f64) -> bool {
        if cost < outcome.best_cost - EPSILON {
            debug!(
                "gls new best {:.1} (was {:.1}) at round {}",
                cost, outcome.best_cost, outcome.iterations
            );
            outcome.best = route.to_vec();
            outcome.best_cost = cost;
            true
        } else {
            false
        }
    }
}

/// Randomly rearranges the interior of `route`; endpoints stay fixed.
///
/// Requires at least two interior cities.
fn perturb(route: &mut Vec<usize>, rng: &mut StdRng) {
    let n = route.len();
    let m = n - 2;
    if m >= 4 {
        // Double bridge: A B C D -> A C B D over the interior
        let mut cuts = rand::seq::index::sample(rng, m - 1, 3).into_vec();
        cuts.sort_unstable();
        let (p1, p2, p3) = (cuts[0] + 1, cuts[1] + 1, cuts[2] + 1);
        let interior = &route[1..n - 1];
        let mut next = Vec::with_capacity(n);
        next.push(route[0]);
        next.extend_from_slice(&interior[..p1]);
        next.extend_from_slice(&interior[p2..p3]);
        next.extend_from_slice(&interior[p1..p2]);
        next.extend_from_slice(&interior[p3..]);
        next.push(route[n - 1]);
        *route = next;
    } else {
        let i = rng.random_range(1..n - 2);
        let j = rng.random_range(i + 1..n - 1);
        route[i..=j].reverse();
    }
}
