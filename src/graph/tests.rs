use super::*;
use crate::types::City;

fn capitals() -> Vec<City> {
    vec![
        City::named(10, "Madrid", 40.4168, -3.7038),
        City::named(20, "Paris", 48.8566, 2.3522),
        City::named(30, "Berlin", 52.5200, 13.4050),
        City::named(40, "Rome", 41.9028, 12.4964),
        City::named(50, "Lisbon", 38.7223, -9.1393),
    ]
}

#[test]
fn test_empty_and_single_node() {
    let empty = build_complete_graph(vec![]);
    assert!(empty.is_empty());
    assert_eq!(empty.distance_matrix().rows, 0);

    let single = build_complete_graph(vec![City::new(1, 10.0, 20.0)]);
    assert_eq!(single.len(), 1);
    assert_eq!(single.distance(0, 0), 0.0);
    assert!(single.neighbors(0).is_empty());
}

#[test]
fn test_matrix_is_symmetric_with_zero_diagonal() {
    let graph = build_complete_graph(capitals());
    for i in 0..graph.len() {
        assert_eq!(graph.distance(i, i), 0.0);
        for j in 0..graph.len() {
            assert_eq!(graph.distance(i, j), graph.distance(j, i));
            if i != j {
                assert!(graph.distance(i, j) > 0.0);
            }
        }
    }
}

#[test]
fn test_triangle_inequality() {
    let graph = build_complete_graph(capitals());
    let n = graph.len();
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                assert!(graph.distance(i, k) <= graph.distance(i, j) + graph.distance(j, k) + 1e-9);
            }
        }
    }
}

#[test]
fn test_known_haversine_distance() {
    // Madrid to Paris is about 1053 km along the great circle.
    let graph = build_complete_graph(capitals());
    let d = graph.distance_by_id(10, 20).unwrap();
    assert!((d - 1053.0).abs() < 5.0, "unexpected distance {}", d);

    // A quarter of the equator.
    let a = City::new(1, 0.0, 0.0);
    let b = City::new(2, 0.0, 90.0);
    let quarter = std::f64::consts::FRAC_PI_2 * EARTH_RADIUS_KM;
    assert!((haversine_km(&a, &b) - quarter).abs() < 1e-6);
}

#[test]
fn test_id_lookup_and_adjacency() {
    let graph = build_complete_graph(capitals());
    assert_eq!(graph.index_of(30), Some(2));
    assert_eq!(graph.index_of(99), None);
    assert_eq!(graph.distance_by_id(10, 99), None);

    let neighbors = graph.neighbors(1);
    assert_eq!(neighbors.len(), 4);
    assert!(neighbors.iter().all(|nb| nb.index != 1));
    assert_eq!(neighbors[0].id, 10);
    assert_eq!(neighbors[0].weight, graph.distance(1, 0));
}

#[test]
fn test_euclidean_metric() {
    let graph = CompleteGraph::build_with(
        vec![City::new(1, 0.0, 0.0), City::new(2, 3.0, 4.0)],
        euclidean,
    );
    assert_eq!(graph.distance(0, 1), 5.0);
}

#[test]
fn test_format_truncates_neighbors() {
    let graph = build_complete_graph(capitals());
    let dump = graph.format(2);
    assert!(dump.starts_with("CompleteGraph: 5 nodes"));
    assert!(dump.contains("Madrid"));
    assert!(dump.contains("... (+2)"));
    assert!(dump.contains("Distance matrix (km), first 5 rows/cols:"));
    assert_eq!(graph.to_string(), graph.format(8));
}

#[test]
fn test_rebuild_is_equal() {
    let a = build_complete_graph(capitals());
    let b = build_complete_graph(capitals());
    assert_eq!(a, b);

    let mut moved = capitals();
    moved[0].lat += 1.0;
    assert_ne!(a, build_complete_graph(moved));
}
