//! Solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RoutingError, RoutingResult};

/// Upper bound applied to the configured time budget (one year).
const MAX_TIME_LIMIT_SECS: f64 = 365.0 * 24.0 * 3600.0;

/// Construction heuristic used to build the initial route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstSolutionStrategy {
    /// Extend the path from its tail by the cheapest outgoing arc.
    #[default]
    PathCheapestArc,
    /// Insert the city with the smallest marginal cost anywhere in the path.
    CheapestInsertion,
}

/// Parameters for [`RouteSolver`](crate::solver::RouteSolver).
///
/// All fields have defaults, so a partial JSON/TOML document deserializes.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_intercity::config::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_time_limit(Duration::from_millis(500))
///     .with_max_iterations(200)
///     .with_seed(7);
/// assert_eq!(config.time_limit(), Duration::from_millis(500));
/// assert_eq!(config.max_iterations, Some(200));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Wall-clock budget for the improvement phase, in seconds.
    pub time_limit_secs: f64,
    /// Optional cap on penalty rounds; whichever limit hits first stops the search.
    pub max_iterations: Option<usize>,
    /// Construction heuristic.
    pub first_solution: FirstSolutionStrategy,
    /// Finite cost substituted for unreachable pairs. Must be positive and
    /// should exceed every real distance in the network.
    pub unreachable_cost: f64,
    /// Guided local search alpha; scales penalty weight by the average arc
    /// cost. Must be positive. If the first local optimum costs nothing the
    /// penalty weight is 1.
    pub penalty_factor: f64,
    /// Penalty rounds without a new best before penalties are reset and the
    /// search restarts from a perturbed best route. `0` disables restarts.
    pub restart_after: usize,
    /// Seed for restart perturbations.
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 30.0,
            max_iterations: None,
            first_solution: FirstSolutionStrategy::default(),
            unreachable_cost: 999_999.0,
            penalty_factor: 0.3,
            restart_after: 50,
            seed: 42,
        }
    }
}

impl SolverConfig {
    /// Sets the improvement-phase time budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_secs = limit.as_secs_f64();
        self
    }

    /// Caps the number of penalty rounds.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Sets the construction heuristic.
    pub fn with_first_solution(mut self, strategy: FirstSolutionStrategy) -> Self {
        self.first_solution = strategy;
        self
    }

    /// Sets the cost used for unreachable pairs.
    pub fn with_unreachable_cost(mut self, cost: f64) -> Self {
        self.unreachable_cost = cost;
        self
    }

    /// Sets the guided local search alpha.
    pub fn with_penalty_factor(mut self, alpha: f64) -> Self {
        self.penalty_factor = alpha;
        self
    }

    /// Sets how many stalled rounds trigger a restart.
    pub fn with_restart_after(mut self, rounds: usize) -> Self {
        self.restart_after = rounds;
        self
    }

    /// Sets the perturbation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the settings that have no safe fallback.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidConfig`] if `unreachable_cost` or
    /// `penalty_factor` is not a finite positive number.
    pub fn validate(&self) -> RoutingResult<()> {
        if !(self.unreachable_cost.is_finite() && self.unreachable_cost > 0.0) {
            return Err(RoutingError::InvalidConfig(format!(
                "unreachable_cost must be finite and positive, got {}",
                self.unreachable_cost
            )));
        }
        if !(self.penalty_factor.is_finite() && self.penalty_factor > 0.0) {
            return Err(RoutingError::InvalidConfig(format!(
                "penalty_factor must be finite and positive, got {}",
                self.penalty_factor
            )));
        }
        Ok(())
    }

    /// Improvement-phase budget as a `Duration`.
    ///
    /// Negative or NaN values are treated as zero; larger values are capped
    /// at one year.
    pub fn time_limit(&self) -> Duration {
        if self.time_limit_secs > 0.0 {
            Duration::from_secs_f64(self.time_limit_secs.min(MAX_TIME_LIMIT_SECS))
        } else {
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.time_limit(), Duration::from_secs(30));
        assert_eq!(c.unreachable_cost, 999_999.0);
        assert_eq!(c.first_solution, FirstSolutionStrategy::PathCheapestArc);
        assert!(c.max_iterations.is_none());
    }

    #[test]
    fn test_partial_json() {
        let c: SolverConfig =
            serde_json::from_str(r#"{"time_limit_secs": 2.5, "first_solution": "cheapest_insertion"}"#)
                .expect("valid json");
        assert_eq!(c.time_limit(), Duration::from_millis(2500));
        assert_eq!(c.first_solution, FirstSolutionStrategy::CheapestInsertion);
        assert_eq!(c.seed, 42);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_unreachable_cost_rejected() {
        for cost in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let c = SolverConfig::default().with_unreachable_cost(cost);
            assert!(
                matches!(c.validate(), Err(RoutingError::InvalidConfig(_))),
                "unreachable_cost {cost} accepted"
            );
        }
    }

    #[test]
    fn test_bad_penalty_factor_rejected() {
        for alpha in [0.0, -0.3, f64::NAN] {
            let c = SolverConfig::default().with_penalty_factor(alpha);
            assert!(
                matches!(c.validate(), Err(RoutingError::InvalidConfig(_))),
                "penalty_factor {alpha} accepted"
            );
        }
    }

    #[test]
    fn test_negative_time_limit() {
        let c = SolverConfig {
            time_limit_secs: -1.0,
            ..SolverConfig::default()
        };
        assert_eq!(c.time_limit(), Duration::ZERO);
    }

    #[test]
    fn test_infinite_time_limit_capped() {
        let c = SolverConfig {
            time_limit_secs: f64::INFINITY,
            ..SolverConfig::default()
        };
        assert_eq!(c.time_limit(), Duration::from_secs(365 * 24 * 3600));
    }

    #[test]
    fn test_builders() {
        let c = SolverConfig::default()
            .with_unreachable_cost(1e9)
            .with_penalty_factor(0.1)
            .with_restart_after(0)
            .with_first_solution(FirstSolutionStrategy::CheapestInsertion);
        assert_eq!(c.unreachable_cost, 1e9);
        assert_eq!(c.penalty_factor, 0.1);
        assert_eq!(c.restart_after, 0);
        assert_eq!(c.first_solution, FirstSolutionStrategy::CheapestInsertion);
    }
}
