//! Per-segment and aggregate route statistics.

use std::fmt;

use serde::Serialize;

use crate::distance::{DistanceMatrix, ModeMatrix};
use crate::models::{CityRegistry, TransportMode};

/// One consecutive pair of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Departure city index.
    pub from: usize,
    /// Arrival city index.
    pub to: usize,
    /// Chosen mode, `None` if the pair is unreachable.
    pub mode: Option<TransportMode>,
    /// Distance of the chosen mode; infinite if unreachable.
    pub distance: f64,
}

/// Distance and segment count for one transport mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ModeTotals {
    /// Summed distance.
    pub distance: f64,
    /// Number of segments.
    pub segments: usize,
}

/// Statistics of a solved route for presentation layers.
///
/// Unreachable segments are counted separately and excluded from all
/// distance totals.
///
/// # Examples
///
/// ```
/// use u_intercity::network::NetworkBuilder;
/// use u_intercity::models::TransportMode;
/// use u_intercity::report::RouteReport;
///
/// let network = NetworkBuilder::new()
///     .edge(TransportMode::Road, "A", "B", 100.0)
///     .edge(TransportMode::Rail, "B", "C", 60.0)
///     .build()
///     .unwrap();
/// let report = RouteReport::build(&[0, 1, 2], network.best_mode(), network.best_distance());
/// assert_eq!(report.total_distance, 160.0);
/// assert_eq!(report.rail.segments, 1);
/// assert_eq!(report.city_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// Route in visiting order.
    pub cities: Vec<usize>,
    /// Consecutive pairs with their mode and distance.
    pub segments: Vec<Segment>,
    /// Sum of reachable segment distances.
    pub total_distance: f64,
    /// Road subtotal.
    pub road: ModeTotals,
    /// Rail subtotal.
    pub rail: ModeTotals,
    /// Segments with no connecting mode.
    pub unreachable_segments: usize,
    /// Number of entries in the route.
    pub city_count: usize,
}

impl RouteReport {
    /// Derives statistics for `cities` from the resolved matrices.
    ///
    /// # Panics
    ///
    /// Panics if a city index is outside the matrices.
    pub fn build(cities: &[usize], modes: &ModeMatrix, distances: &DistanceMatrix) -> Self {
        let mut report = Self {
            cities: cities.to_vec(),
            segments: Vec::with_capacity(cities.len().saturating_sub(1)),
            total_distance: 0.0,
            road: ModeTotals::default(),
            rail: ModeTotals::default(),
            unreachable_segments: 0,
            city_count: cities.len(),
        };

        for w in cities.windows(2) {
            let (from, to) = (w[0], w[1]);
            let mode = modes.get(from, to);
            let distance = distances.get(from, to);

            match mode {
                Some(m) if distance.is_finite() => {
                    report.total_distance += distance;
                    let totals = report.totals_mut(m);
                    totals.distance += distance;
                    totals.segments += 1;
                }
                _ => report.unreachable_segments += 1,
            }
            report.segments.push(Segment {
                from,
                to,
                mode,
                distance,
            });
        }
        report
    }

    /// Totals for one mode.
    pub fn totals(&self, mode: TransportMode) -> &ModeTotals {
        match mode {
            TransportMode::Road => &self.road,
            TransportMode::Rail => &self.rail,
        }
    }

    fn totals_mut(&mut self, mode: TransportMode) -> &mut ModeTotals {
        match mode {
            TransportMode::Road => &mut self.road,
            TransportMode::Rail => &mut self.rail,
        }
    }

    /// Returns `true` if the route crosses a pair no network connects.
    pub fn has_unreachable(&self) -> bool {
        self.unreachable_segments > 0
    }

    /// Plain-text route details using city names from `registry`.
    pub fn display<'a>(&'a self, registry: &'a CityRegistry) -> ReportDisplay<'a> {
        ReportDisplay {
            report: self,
            registry,
        }
    }
}

/// Text rendering of a [`RouteReport`]; see [`RouteReport::display`].
pub struct ReportDisplay<'a> {
    report: &'a RouteReport,
    registry: &'a CityRegistry,
}

impl ReportDisplay<'_> {
    fn name(&self, id: usize) -> &str {
        self.registry.name(id).unwrap_or("?")
    }
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report;
        let rule = "-".repeat(70);

        writeln!(f, "Route Details (Best Mode Selected):")?;
        writeln!(f, "{rule}")?;
        for s in &r.segments {
            let (from, to) = (self.name(s.from), self.name(s.to));
            match s.mode {
                Some(mode) if s.distance.is_finite() => {
                    writeln!(f, "{from} → {to}: {:.1} km ({mode})", s.distance)?
                }
                _ => writeln!(f, "{from} → {to}: unreachable (none)")?,
            }
        }
        writeln!(f, "{rule}")?;
        writeln!(f, "Total Distance: {:.1} km", r.total_distance)?;
        writeln!(
            f,
            "Road Distance: {:.1} km ({} segments)",
            r.road.distance, r.road.segments
        )?;
        writeln!(
            f,
            "Rail Distance: {:.1} km ({} segments)",
            r.rail.distance, r.rail.segments
        )?;
        if r.has_unreachable() {
            writeln!(f, "Unreachable Segments: {}", r.unreachable_segments)?;
        }
        writeln!(f, "Number of Cities Visited: {}", r.city_count)?;
        let names: Vec<&str> = r.cities.iter().map(|&c| self.name(c)).collect();
        write!(f, "Cities in Route: {}", names.join(" → "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Network, NetworkBuilder};

    fn network() -> Network {
        NetworkBuilder::new()
            .edge(TransportMode::Road, "A", "B", 100.0)
            .edge(TransportMode::Road, "B", "C", 150.0)
            .edge(TransportMode::Road, "A", "C", 400.0)
            .edge(TransportMode::Rail, "A", "C", 90.0)
            .edge(TransportMode::Rail, "C", "D", 10.0)
            .edge(TransportMode::Road, "E", "F", 1.0)
            .build()
            .expect("valid")
    }

    fn report(cities: &[usize]) -> RouteReport {
        let n = network();
        RouteReport::build(cities, n.best_mode(), n.best_distance())
    }

    #[test]
    fn test_mixed_modes() {
        // Road edges register first: A=0, B=1, C=2, E=3, F=4, then D=5
        // B → A (road 100) → C (rail 90) → D (rail 10)
        let r = report(&[1, 0, 2, 5]);
        assert_eq!(r.segments.len(), 3);
        assert_eq!(r.segments[0].mode, Some(TransportMode::Road));
        assert_eq!(r.segments[1].mode, Some(TransportMode::Rail));
        assert_eq!(r.total_distance, 100.0 + 90.0 + 10.0);
        assert_eq!(r.road, ModeTotals { distance: 100.0, segments: 1 });
        assert_eq!(r.rail, ModeTotals { distance: 100.0, segments: 2 });
        assert_eq!(r.city_count, 4);
        assert!(!r.has_unreachable());
    }

    #[test]
    fn test_single_city_route() {
        let r = report(&[2]);
        assert!(r.segments.is_empty());
        assert_eq!(r.total_distance, 0.0);
        assert_eq!(r.city_count, 1);
    }

    #[test]
    fn test_empty_route() {
        let r = report(&[]);
        assert!(r.segments.is_empty());
        assert_eq!(r.city_count, 0);
    }

    #[test]
    fn test_unreachable_segment_excluded() {
        // D → E is connected by nothing
        let r = report(&[5, 3, 4]);
        assert_eq!(r.unreachable_segments, 1);
        assert_eq!(r.segments[0].mode, None);
        assert!(r.segments[0].distance.is_infinite());
        assert_eq!(r.total_distance, 1.0);
        assert!(r.has_unreachable());
    }

    #[test]
    fn test_totals_accessor() {
        let r = report(&[0, 1]);
        assert_eq!(r.totals(TransportMode::Road).segments, 1);
        assert_eq!(r.totals(TransportMode::Rail).segments, 0);
    }

    #[test]
    fn test_display() {
        let n = network();
        let r = RouteReport::build(&[0, 1, 2], n.best_mode(), n.best_distance());
        let text = r.display(n.registry()).to_string();
        assert!(text.contains("A → B: 100.0 km (road)"));
        assert!(text.contains("Total Distance: 250.0 km"));
        assert!(text.contains("Number of Cities Visited: 3"));
        assert!(text.ends_with("Cities in Route: A → B → C"));
    }

    #[test]
    fn test_display_unreachable() {
        let n = network();
        let r = RouteReport::build(&[5, 3], n.best_mode(), n.best_distance());
        let text = r.display(n.registry()).to_string();
        assert!(text.contains("D → E: unreachable (none)"));
        assert!(text.contains("Unreachable Segments: 1"));
    }
}
