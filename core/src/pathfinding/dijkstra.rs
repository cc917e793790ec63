use super::utils::{PathResult, SearchStats, reconstruct_path};
use crate::error::{CastpathError, Result};
use crate::graph::{CollaborationGraph, WeightTable};
use crate::pathfinding_config::PathfindingConfig;
use crate::records::ActorId;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

struct DijkstraNode<'g> {
    cost: f64,
    sequence: u64,
    actor: &'g ActorId,
}

impl PartialEq for DijkstraNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraNode<'_> {}

impl PartialOrd for DijkstraNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; equal costs pop in push order
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

struct DijkstraState<'g> {
    heap: BinaryHeap<DijkstraNode<'g>>,
    distances: FxHashMap<&'g ActorId, f64>,
    parent_map: FxHashMap<&'g ActorId, &'g ActorId>,
    visited: FxHashSet<&'g ActorId>,
    pushed: u64,
}

impl<'g> DijkstraState<'g> {
    fn new(start: &'g ActorId) -> Self {
        let mut state = Self {
            heap: BinaryHeap::new(),
            distances: FxHashMap::default(),
            parent_map: FxHashMap::default(),
            visited: FxHashSet::default(),
            pushed: 0,
        };
        state.distances.insert(start, 0.0);
        state.push(start, 0.0);
        state
    }

    fn push(&mut self, actor: &'g ActorId, cost: f64) {
        self.heap.push(DijkstraNode {
            cost,
            sequence: self.pushed,
            actor,
        });
        self.pushed += 1;
    }

    /// Unknown actors sit at positive infinity.
    fn distance(&self, actor: &ActorId) -> f64 {
        self.distances.get(actor).copied().unwrap_or(f64::INFINITY)
    }

    fn visit_neighbor(
        &mut self,
        neighbor: &'g ActorId,
        current: &'g ActorId,
        edge_weight: f64,
        current_cost: f64,
    ) {
        let new_cost = current_cost + edge_weight;
        if new_cost >= self.distance(neighbor) {
            return;
        }

        self.distances.insert(neighbor, new_cost);
        self.parent_map.insert(neighbor, current);
        self.push(neighbor, new_cost);
    }

    fn stats(&self, search_timer: Instant) -> SearchStats {
        SearchStats {
            actors_visited: self.visited.len(),
            duration_ms: search_timer.elapsed().as_millis() as u64,
        }
    }
}

/// Cheapest path under `weights`. The engine is metric-agnostic: the same
/// adjacency can be searched with any table derived from the same records.
///
/// Stale heap entries are left in place and skipped when popped.
pub fn dijkstra_find_path<'g>(
    graph: &'g CollaborationGraph,
    weights: &WeightTable,
    start: &'g ActorId,
    target: &'g ActorId,
    config: &PathfindingConfig,
) -> Result<PathResult> {
    let search_timer = Instant::now();
    let mut dijkstra_state = DijkstraState::new(start);

    while let Some(DijkstraNode {
        cost,
        actor: current_actor,
        ..
    }) = dijkstra_state.heap.pop()
    {
        if current_actor == target {
            let path = reconstruct_path(&dijkstra_state.parent_map, start, target);
            let stats = dijkstra_state.stats(search_timer);
            tracing::debug!(
                metric = weights.metric().as_str(),
                hops = path.len() - 1,
                cost,
                visited = stats.actors_visited,
                "dijkstra found path"
            );
            return Ok(PathResult::found(path, Some(cost), stats));
        }

        if !dijkstra_state.visited.insert(current_actor) {
            continue;
        }

        if let Err(error) = config.check(search_timer, dijkstra_state.visited.len()) {
            tracing::warn!(%error, "dijkstra search aborted");
            return Err(error);
        }

        for neighbor_actor in graph.neighbors(current_actor.as_str()) {
            let edge_weight = weights
                .get(current_actor.as_str(), neighbor_actor.as_str())
                .ok_or_else(|| CastpathError::MissingWeight {
                    from: current_actor.clone(),
                    to: neighbor_actor.clone(),
                })?;
            dijkstra_state.visit_neighbor(neighbor_actor, current_actor, edge_weight, cost);
        }
    }

    let stats = dijkstra_state.stats(search_timer);
    tracing::debug!(visited = stats.actors_visited, "dijkstra exhausted without reaching target");
    Ok(PathResult::not_found(stats))
}
