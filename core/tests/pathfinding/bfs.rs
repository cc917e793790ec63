use crate::common::{chain_store, chain_with_loners_store, diamond_store, disjoint_store, id, ids};
use castpath_core::{Metric, bfs_find_path, build_graph};

#[test]
fn test_bfs_finds_chain_path() {
    let store = chain_store();
    let graph = build_graph(&store, Metric::Unweighted);
    let (from, to) = (id("nm0000001"), id("nm0000003"));

    let result = bfs_find_path(&graph, &from, &to);

    assert!(result.is_found());
    assert_eq!(result.actors, ids(&["nm0000001", "nm0000002", "nm0000003"]));
    assert_eq!(result.hops(), 2);
    assert_eq!(result.cost, None);
    assert!(result.stats.actors_visited >= 3);
}

#[test]
fn test_bfs_prefers_fewest_hops() {
    let store = diamond_store();
    let graph = build_graph(&store, Metric::Rating);
    let (from, to) = (id("nm0000010"), id("nm0000013"));

    let result = bfs_find_path(&graph, &from, &to);

    assert_eq!(result.actors, ids(&["nm0000010", "nm0000011", "nm0000013"]));
}

#[test]
fn test_bfs_same_source_and_target() {
    let store = chain_store();
    let graph = build_graph(&store, Metric::Unweighted);
    let actor = id("nm0000002");

    let result = bfs_find_path(&graph, &actor, &actor);

    assert_eq!(result.actors, ids(&["nm0000002"]));
    assert_eq!(result.hops(), 0);
}

#[test]
fn test_bfs_unreachable_target_is_empty() {
    let store = disjoint_store();
    let graph = build_graph(&store, Metric::Unweighted);
    let (from, to) = (id("nm0000020"), id("nm0000023"));

    let result = bfs_find_path(&graph, &from, &to);

    assert!(!result.is_found());
    assert!(result.actors.is_empty());
    assert_eq!(result.hops(), 0);
    assert_eq!(result.stats.actors_visited, 2);
}

#[test]
fn test_bfs_isolated_actor() {
    let store = chain_with_loners_store();
    let graph = build_graph(&store, Metric::Unweighted);
    let (from, to) = (id("nm0000004"), id("nm0000001"));

    assert!(!bfs_find_path(&graph, &from, &to).is_found());
}

#[test]
fn test_bfs_unknown_actor() {
    let store = chain_store();
    let graph = build_graph(&store, Metric::Unweighted);
    let (from, to) = (id("nm4040404"), id("nm0000001"));

    assert!(!bfs_find_path(&graph, &from, &to).is_found());
}
