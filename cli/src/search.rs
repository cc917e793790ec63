use anyhow::{Result, bail};
use castpath_core::string_normalization::clean_str;
use castpath_core::{
    ActorId, GraphBuilder, GraphStats, Metric, NameLookup, PathAnnotation, PathAnnotator,
    PathResult, PathfindingConfig, RecordStore, WeightPolicy, bfs_find_path, dijkstra_find_path,
};
use std::time::Duration;

pub struct SearchRequest {
    pub from_actor: ActorId,
    pub to_actor: ActorId,
    pub from_name: String,
    pub to_name: String,
    pub metric: Metric,
    pub policy: WeightPolicy,
    pub config: PathfindingConfig,
}

pub struct SearchResult {
    pub request: SearchRequest,
    pub path: PathResult,
    pub annotation: Option<PathAnnotation>,
    pub graph_stats: GraphStats,
}

/// Resolves an actor by exact id first, then by normalized name. When several
/// actors share a normalized name, an exact case-insensitive match wins,
/// otherwise the first record.
pub fn find_best_actor_match(
    query: &str,
    store: &RecordStore,
    name_lookup: &NameLookup,
) -> Result<ActorId> {
    if let Some(actor) = store.actor(query.trim()) {
        return Ok(actor.id.clone());
    }

    let lowercase_query = query.to_lowercase();
    let Some(actor_ids) = name_lookup.get(&clean_str(query)) else {
        bail!("Actor '{}' not found in records", query);
    };

    let exact_match = actor_ids.iter().find(|actor_id| {
        store
            .actor(actor_id.as_str())
            .is_some_and(|actor| actor.name.to_lowercase() == lowercase_query)
    });

    match exact_match.or_else(|| actor_ids.first()) {
        Some(actor_id) => Ok(actor_id.clone()),
        None => bail!("Actor '{}' not found in records", query),
    }
}

pub fn create_search_request(
    from_query: &str,
    to_query: &str,
    metric: Metric,
    policy: WeightPolicy,
    timeout_ms: Option<u64>,
    store: &RecordStore,
) -> Result<SearchRequest> {
    let name_lookup = store.name_lookup();
    let from_actor = find_best_actor_match(from_query, store, &name_lookup)?;
    let to_actor = find_best_actor_match(to_query, store, &name_lookup)?;

    let from_name = display_name(store, &from_actor);
    let to_name = display_name(store, &to_actor);

    let mut config = PathfindingConfig::default();
    if let Some(timeout_ms) = timeout_ms {
        config = config.with_deadline(Duration::from_millis(timeout_ms));
    }

    Ok(SearchRequest {
        from_actor,
        to_actor,
        from_name,
        to_name,
        metric,
        policy,
        config,
    })
}

pub fn execute_pathfinding_search(
    request: SearchRequest,
    store: &RecordStore,
) -> Result<SearchResult> {
    if request.metric == Metric::GenderRatio && !store.has_gender_data() {
        tracing::warn!(
            "no female cast counts loaded; gender ratio costs are uniform (pass --cast-genders)"
        );
    }

    let graph = GraphBuilder::new(store)
        .metric(request.metric)
        .policy(request.policy)
        .build();

    let path = if request.metric.is_weighted() {
        dijkstra_find_path(
            &graph,
            graph.weights(),
            &request.from_actor,
            &request.to_actor,
            &request.config,
        )?
    } else {
        bfs_find_path(&graph, &request.from_actor, &request.to_actor)
    };

    let annotation = if path.is_found() {
        Some(PathAnnotator::new(store).for_metric(request.metric, &path.actors)?)
    } else {
        None
    };

    Ok(SearchResult {
        graph_stats: graph.stats(),
        request,
        path,
        annotation,
    })
}

pub fn display_name(store: &RecordStore, actor_id: &ActorId) -> String {
    store
        .actor(actor_id.as_str())
        .map_or_else(|| actor_id.to_string(), |actor| actor.name.clone())
}
