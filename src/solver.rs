//! Route solver: endpoint validation, construction and guided local search.
//!
//! The solver reads the network's best-distance matrix, replaces unreachable
//! pairs with [`SolverConfig::unreachable_cost`] for the duration of a
//! query, builds an initial route and improves it until the time budget
//! expires.
//!
//! Improvement is wall-clock bounded, so two runs with the same input may
//! return different routes. The returned cost is never above the
//! construction cost, and a larger budget never yields a worse result for
//! the same seed and iteration cap.

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::SolverConfig;
use crate::constructive::construct;
use crate::distance::{sequence_cost, DistanceMatrix};
use crate::error::{RoutingError, RoutingResult};
use crate::metaheuristic::GuidedLocalSearch;
use crate::models::{Route, RouteKind};
use crate::network::Network;
use crate::report::RouteReport;

/// A solved route with search statistics.
#[derive(Debug, Clone)]
pub struct RouteSolution {
    /// The route; its total distance uses the network's true distances and
    /// is infinite if an unreachable pair had to be used.
    pub route: Route,
    /// Optimized cost (unreachable pairs at the substitute cost).
    pub cost: f64,
    /// Cost of the construction-phase route.
    pub initial_cost: f64,
    /// Guided local search rounds completed.
    pub iterations: usize,
    /// Penalty resets performed.
    pub restarts: usize,
    /// Total solve time.
    pub elapsed: Duration,
}

impl RouteSolution {
    /// Returns `true` if the route uses a pair no network connects.
    pub fn uses_unreachable(&self) -> bool {
        !self.route.total_distance().is_finite()
    }
}

/// Solves open-path and closed-tour queries over a [`Network`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_intercity::config::SolverConfig;
/// use u_intercity::models::TransportMode;
/// use u_intercity::network::NetworkBuilder;
/// use u_intercity::solver::RouteSolver;
///
/// let network = NetworkBuilder::new()
///     .edge(TransportMode::Road, "A", "B", 100.0)
///     .edge(TransportMode::Road, "B", "C", 150.0)
///     .edge(TransportMode::Road, "A", "C", 400.0)
///     .build()
///     .unwrap();
/// let config = SolverConfig::default().with_time_limit(Duration::from_millis(100));
/// let solver = RouteSolver::new(&network, config);
///
/// let route = solver.find_route("A", "C").unwrap();
/// assert_eq!(route, vec!["A", "B", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteSolver<'a> {
    network: &'a Network,
    config: SolverConfig,
}

impl<'a> RouteSolver<'a> {
    /// Creates a solver over `network`.
    pub fn new(network: &'a Network, config: SolverConfig) -> Self {
        Self { network, config }
    }

    /// The solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds a path from `start` to `end` visiting every city exactly once.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::InvalidEndpoints`] if either index is unregistered
    /// - [`RoutingError::SameEndpoints`] if `start == end`
    /// - [`RoutingError::InvalidConfig`] if the configuration fails
    ///   [`SolverConfig::validate`]
    /// - [`RoutingError::NoSolution`] if no route can be constructed
    pub fn solve_path(&self, start: usize, end: usize) -> RoutingResult<RouteSolution> {
        self.check_endpoints(start, end)?;
        if start == end {
            let name = self.network.city_name(start).unwrap_or_default();
            return Err(RoutingError::SameEndpoints(name.to_string()));
        }
        self.solve(start, end, RouteKind::Path)
    }

    /// Finds a closed tour from `start` through every other city and back.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::InvalidEndpoints`] if `start` is unregistered
    /// - [`RoutingError::InvalidConfig`] if the configuration fails
    ///   [`SolverConfig::validate`]
    /// - [`RoutingError::NoSolution`] if fewer than two cities are registered
    pub fn solve_tour(&self, start: usize) -> RoutingResult<RouteSolution> {
        self.check_endpoints(start, start)?;
        self.solve(start, start, RouteKind::Tour)
    }

    /// Name-based [`solve_path`](Self::solve_path) returning city names.
    ///
    /// # Errors
    ///
    /// [`RoutingError::UnknownCity`] for an unregistered name, otherwise as
    /// [`solve_path`](Self::solve_path).
    pub fn find_route(&self, start: &str, end: &str) -> RoutingResult<Vec<String>> {
        let s = self.network.city_index(start)?;
        let e = self.network.city_index(end)?;
        let solution = self.solve_path(s, e)?;
        Ok(self.network.city_names(solution.route.cities()))
    }

    /// Name-based [`solve_tour`](Self::solve_tour) returning city names.
    ///
    /// # Errors
    ///
    /// [`RoutingError::UnknownCity`] for an unregistered name, otherwise as
    /// [`solve_tour`](Self::solve_tour).
    pub fn find_tour(&self, start: &str) -> RoutingResult<Vec<String>> {
        let s = self.network.city_index(start)?;
        let solution = self.solve_tour(s)?;
        Ok(self.network.city_names(solution.route.cities()))
    }

    /// Statistics for a solved route.
    pub fn report(&self, route: &Route) -> RouteReport {
        RouteReport::build(
            route.cities(),
            self.network.best_mode(),
            self.network.best_distance(),
        )
    }

    fn check_endpoints(&self, start: usize, end: usize) -> RoutingResult<()> {
        let size = self.network.size();
        if start >= size || end >= size {
            return Err(RoutingError::InvalidEndpoints { start, end, size });
        }
        Ok(())
    }

    fn solve(&self, start: usize, end: usize, kind: RouteKind) -> RoutingResult<RouteSolution> {
        self.config.validate()?;
        let started = Instant::now();
        let n = self.network.size();
        let costs: DistanceMatrix = self
            .network
            .best_distance()
            .with_unreachable_cost(self.config.unreachable_cost);

        let initial = construct(self.config.first_solution, n, start, end, &costs)
            .ok_or_else(|| {
                RoutingError::NoSolution(format!(
                    "cannot build a {kind:?} from {start} to {end} over {n} cities"
                ))
            })?;

        let deadline = Instant::now() + self.config.time_limit();
        let outcome = GuidedLocalSearch::new(&self.config).run(&costs, initial, deadline);

        let total_distance = sequence_cost(&outcome.best, self.network.best_distance());
        let route = Route::new(kind, outcome.best, total_distance);
        debug_assert!(route.visits_all(n));

        let solution = RouteSolution {
            route,
            cost: outcome.best_cost,
            initial_cost: outcome.initial_cost,
            iterations: outcome.iterations,
            restarts: outcome.restarts,
            elapsed: started.elapsed(),
        };

        info!(
            "solved {:?} over {} cities: cost {:.1} (initial {:.1}), {} rounds, {} restarts in {:?}",
            kind,
            n,
            solution.cost,
            solution.initial_cost,
            solution.iterations,
            solution.restarts,
            solution.elapsed
        );
        if solution.uses_unreachable() {
            warn!("route uses at least one pair not connected by road or rail");
        }
        Ok(solution)
    }
}
