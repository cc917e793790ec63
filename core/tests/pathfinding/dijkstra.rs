use crate::common::{chain_store, diamond_store, disjoint_store, id, ids};
use castpath_core::{
    AbortReason, CastpathError, Metric, PathfindingConfig, WeightPolicy, WeightTable,
    bfs_find_path, build_graph, dijkstra_find_path,
};
use std::time::Duration;

#[test]
fn test_chillest_path_cost_on_chain() {
    let store = chain_store();
    let graph = build_graph(&store, Metric::Rating);
    let (from, to) = (id("nm0000001"), id("nm0000003"));

    let result =
        dijkstra_find_path(&graph, graph.weights(), &from, &to, &PathfindingConfig::default())
            .unwrap();

    assert_eq!(result.actors, ids(&["nm0000001", "nm0000002", "nm0000003"]));
    assert_eq!(result.cost, Some(10.0)); // (10 - 8.0) + (10 - 2.0)
}

#[test]
fn test_gender_ratio_path_cost_on_chain() {
    let store = chain_store();
    let graph = build_graph(&store, Metric::GenderRatio);
    let (from, to) = (id("nm0000001"), id("nm0000003"));

    let result =
        dijkstra_find_path(&graph, graph.weights(), &from, &to, &PathfindingConfig::default())
            .unwrap();

    assert_eq!(result.cost, Some(1.5)); // (1 - 1/2) + (1 - 0/3)
}

#[test]
fn test_chillest_path_trades_hops_for_ratings() {
    let store = diamond_store();
    let graph = build_graph(&store, Metric::Rating);
    let (from, to) = (id("nm0000010"), id("nm0000013"));

    let cheapest =
        dijkstra_find_path(&graph, graph.weights(), &from, &to, &PathfindingConfig::default())
            .unwrap();
    let shortest = bfs_find_path(&graph, &from, &to);

    assert_eq!(
        cheapest.actors,
        ids(&["nm0000010", "nm0000012", "nm0000014", "nm0000013"])
    );
    assert_eq!(cheapest.cost, Some(3.0));
    assert_eq!(shortest.hops(), 2);
}

#[test]
fn test_engine_accepts_table_from_another_metric() {
    let store = chain_store();
    let graph = build_graph(&store, Metric::Unweighted);
    let gender = WeightTable::derive(&store, Metric::GenderRatio, WeightPolicy::KeepLast);
    let (from, to) = (id("nm0000001"), id("nm0000003"));

    let result =
        dijkstra_find_path(&graph, &gender, &from, &to, &PathfindingConfig::default()).unwrap();

    assert_eq!(result.cost, Some(1.5));
}

#[test]
fn test_dijkstra_same_source_and_target() {
    let store = chain_store();
    let graph = build_graph(&store, Metric::Rating);
    let actor = id("nm0000001");

    let result =
        dijkstra_find_path(&graph, graph.weights(), &actor, &actor, &PathfindingConfig::default())
            .unwrap();

    assert_eq!(result.actors, ids(&["nm0000001"]));
    assert_eq!(result.cost, Some(0.0));
}

#[test]
fn test_dijkstra_no_path() {
    let store = disjoint_store();
    let graph = build_graph(&store, Metric::Rating);
    let (from, to) = (id("nm0000021"), id("nm0000022"));

    let result =
        dijkstra_find_path(&graph, graph.weights(), &from, &to, &PathfindingConfig::default())
            .unwrap();

    assert!(!result.is_found());
    assert_eq!(result.cost, None);
}

#[test]
fn test_reachability_matches_bfs() {
    let store = disjoint_store();
    let graph = build_graph(&store, Metric::Rating);
    let config = PathfindingConfig::default();

    for from in graph.vertices() {
        for to in graph.vertices() {
            let weighted = dijkstra_find_path(&graph, graph.weights(), from, to, &config).unwrap();
            let unweighted = bfs_find_path(&graph, from, to);
            assert_eq!(weighted.is_found(), unweighted.is_found());
        }
    }
}

#[test]
fn test_missing_weight_is_reported() {
    let store = chain_store();
    let graph = build_graph(&store, Metric::Unweighted);
    let (from, to) = (id("nm0000001"), id("nm0000003"));

    let error =
        dijkstra_find_path(&graph, graph.weights(), &from, &to, &PathfindingConfig::default())
            .unwrap_err();

    assert_eq!(
        error,
        CastpathError::MissingWeight {
            from: id("nm0000001"),
            to: id("nm0000002"),
        }
    );
}

#[test]
fn test_visit_limit_aborts_search() {
    let store = chain_store();
    let graph = build_graph(&store, Metric::Rating);
    let (from, to) = (id("nm0000001"), id("nm0000003"));
    let config = PathfindingConfig::default().with_max_visited(1);

    let error = dijkstra_find_path(&graph, graph.weights(), &from, &to, &config).unwrap_err();

    assert!(matches!(
        error,
        CastpathError::SearchAborted {
            reason: AbortReason::VisitLimitReached,
            ..
        }
    ));
}

#[test]
fn test_deadline_aborts_search() {
    let store = diamond_store();
    let graph = build_graph(&store, Metric::Rating);
    let (from, to) = (id("nm0000010"), id("nm0000013"));
    let config = PathfindingConfig::default().with_deadline(Duration::ZERO);

    let error = dijkstra_find_path(&graph, graph.weights(), &from, &to, &config).unwrap_err();

    assert!(matches!(
        error,
        CastpathError::SearchAborted {
            reason: AbortReason::DeadlineExceeded,
            ..
        }
    ));
}

#[test]
fn test_generous_deadline_does_not_interfere() {
    let store = diamond_store();
    let graph = build_graph(&store, Metric::Rating);
    let (from, to) = (id("nm0000010"), id("nm0000013"));
    let config = PathfindingConfig::default().with_deadline(Duration::from_secs(60));

    let result = dijkstra_find_path(&graph, graph.weights(), &from, &to, &config).unwrap();

    assert_eq!(result.cost, Some(3.0));
}
