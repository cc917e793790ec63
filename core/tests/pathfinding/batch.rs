use crate::common::{diamond_store, disjoint_store, ids};
use castpath_core::{
    Metric, PathQuery, PathfindingConfig, bfs_find_path, build_graph, dijkstra_find_path,
    find_paths_parallel,
};

#[test]
fn test_parallel_queries_keep_order() {
    let store = diamond_store();
    let graph = build_graph(&store, Metric::Rating);
    let queries = vec![
        PathQuery::new("nm0000010", "nm0000013"),
        PathQuery::new("nm0000011", "nm0000014"),
        PathQuery::new("nm0000012", "nm0000012"),
    ];
    let config = PathfindingConfig::default();

    let results = find_paths_parallel(&graph, Some(graph.weights()), &queries, &config);

    assert_eq!(results.len(), queries.len());
    for (query, result) in queries.iter().zip(&results) {
        let expected =
            dijkstra_find_path(&graph, graph.weights(), &query.source, &query.target, &config)
                .unwrap();
        let result = result.as_ref().unwrap();
        assert_eq!(result.actors, expected.actors);
        assert_eq!(result.cost, expected.cost);
    }
}

#[test]
fn test_parallel_queries_without_weights_use_bfs() {
    let store = disjoint_store();
    let graph = build_graph(&store, Metric::Unweighted);
    let queries = vec![
        PathQuery::new("nm0000020", "nm0000021"),
        PathQuery::new("nm0000020", "nm0000022"),
    ];

    let results = find_paths_parallel(&graph, None, &queries, &PathfindingConfig::default());

    let first = results[0].as_ref().unwrap();
    assert_eq!(first.actors, ids(&["nm0000020", "nm0000021"]));
    assert_eq!(
        first.actors,
        bfs_find_path(&graph, &queries[0].source, &queries[0].target).actors
    );
    assert!(!results[1].as_ref().unwrap().is_found());
}
