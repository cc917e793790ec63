use super::utils::{PathResult, SearchStats, reconstruct_path};
use crate::graph::CollaborationGraph;
use crate::records::ActorId;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{collections::VecDeque, time::Instant};

struct BfsState<'g> {
    queue: VecDeque<&'g ActorId>,
    visited: FxHashSet<&'g ActorId>,
    parent_map: FxHashMap<&'g ActorId, &'g ActorId>,
}

impl<'g> BfsState<'g> {
    fn new(start: &'g ActorId) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: &'g ActorId, current: &'g ActorId) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.queue.push_back(neighbor);
        }
    }
}

/// Fewest-hops path. Unreachable targets yield an empty path, not an error.
pub fn bfs_find_path<'g>(
    graph: &'g CollaborationGraph,
    start: &'g ActorId,
    target: &'g ActorId,
) -> PathResult {
    let search_timer = Instant::now();
    let mut bfs_state = BfsState::new(start);

    while let Some(current_actor) = bfs_state.queue.pop_front() {
        if current_actor == target {
            let path = reconstruct_path(&bfs_state.parent_map, start, target);
            let stats = search_stats(&bfs_state, search_timer);
            tracing::debug!(hops = path.len() - 1, visited = stats.actors_visited, "bfs found path");
            return PathResult::found(path, None, stats);
        }

        for neighbor_actor in graph.neighbors(current_actor.as_str()) {
            bfs_state.visit_neighbor(neighbor_actor, current_actor);
        }
    }

    let stats = search_stats(&bfs_state, search_timer);
    tracing::debug!(visited = stats.actors_visited, "bfs exhausted without reaching target");
    PathResult::not_found(stats)
}

fn search_stats(state: &BfsState<'_>, search_timer: Instant) -> SearchStats {
    SearchStats {
        actors_visited: state.visited.len(),
        duration_ms: search_timer.elapsed().as_millis() as u64,
    }
}
