//! Loads a small network from CSV files on disk and queries it.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use u_intercity::config::SolverConfig;
use u_intercity::models::TransportMode;
use u_intercity::solver::RouteSolver;
use u_intercity::source::load_network;
use u_intercity::RoutingError;

const COORDINATES: &str = "\
City,Latitude,Longitude
Delhi,28.6139,77.2090
Agra,27.1767,78.0081
Jaipur,26.9124,75.7873
Mumbai,19.0760,72.8777
";

const ROAD: &str = "\
From,To,Distance
Delhi,Agra,233
Agra,Jaipur,240
Delhi,Jaipur,280
Jaipur,Mumbai,1150
";

const RAIL: &str = "\
From,To,Distance
Delhi,Mumbai,1380
Agra,Mumbai,1200
";

fn write_fixture(tag: &str, road: &str) -> (PathBuf, PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("u-intercity-{}-{tag}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let coords = dir.join("coordinates.csv");
    let road_path = dir.join("road.csv");
    let rail_path = dir.join("rail.csv");
    fs::write(&coords, COORDINATES).unwrap();
    fs::write(&road_path, road).unwrap();
    fs::write(&rail_path, RAIL).unwrap();
    (coords, road_path, rail_path)
}

#[test]
fn loads_and_solves() {
    let (coords, road, rail) = write_fixture("ok", ROAD);
    let network = load_network(&coords, &road, &rail).unwrap();

    assert_eq!(network.size(), 4);
    assert_eq!(network.city_index("Delhi").unwrap(), 0);
    assert_eq!(network.city_index("Mumbai").unwrap(), 3);
    let coordinate = network.registry().coordinate_of("Agra").unwrap();
    assert!((coordinate.latitude - 27.1767).abs() < 1e-10);

    let (delhi, mumbai) = (0, 3);
    assert_eq!(network.best_mode().get(delhi, mumbai), Some(TransportMode::Rail));
    assert_eq!(network.best_distance().get(mumbai, delhi), 1380.0);

    let config = SolverConfig::default().with_time_limit(Duration::from_millis(200));
    let solver = RouteSolver::new(&network, config);
    let route = solver.find_route("Delhi", "Mumbai").unwrap();
    assert_eq!(route, vec!["Delhi", "Agra", "Jaipur", "Mumbai"]);

    let solution = solver.solve_path(delhi, mumbai).unwrap();
    assert!((solution.route.total_distance() - 1623.0).abs() < 1e-9);
    let report = solver.report(&solution.route);
    assert_eq!(report.road.segments, 3);
    assert_eq!(report.rail.segments, 0);
    let text = report.display(network.registry()).to_string();
    assert!(text.contains("Cities in Route: Delhi → Agra → Jaipur → Mumbai"));
}

#[test]
fn malformed_distance_is_rejected() {
    let (coords, road, rail) = write_fixture("bad", "From,To,Distance\nDelhi,Agra,far\n");
    let err = load_network(&coords, &road, &rail).unwrap_err();
    assert!(matches!(err, RoutingError::Csv(_)));
}

#[test]
fn negative_distance_is_rejected() {
    let (coords, road, rail) = write_fixture("neg", "From,To,Distance\nDelhi,Agra,-5\n");
    let err = load_network(&coords, &road, &rail).unwrap_err();
    assert!(matches!(err, RoutingError::DataLoad(_)));
}

#[test]
fn missing_file_is_io_error() {
    let (coords, _, rail) = write_fixture("missing", ROAD);
    let road = coords.with_file_name("absent.csv");
    let err = load_network(&coords, &road, &rail).unwrap_err();
    assert!(matches!(err, RoutingError::Io(_)));
}
