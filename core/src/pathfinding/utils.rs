use crate::records::ActorId;
use rustc_hash::FxHashMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    pub actors_visited: usize,
    pub duration_ms: u64,
}

/// Outcome of a path query. An empty `actors` list means the target was
/// unreachable; `cost` is only present for weighted searches that found a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub actors: Vec<ActorId>,
    pub cost: Option<f64>,
    pub stats: SearchStats,
}

impl PathResult {
    pub fn found(actors: Vec<ActorId>, cost: Option<f64>, stats: SearchStats) -> Self {
        Self { actors, cost, stats }
    }

    pub fn not_found(stats: SearchStats) -> Self {
        Self {
            actors: Vec::new(),
            cost: None,
            stats,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.actors.is_empty()
    }

    pub fn hops(&self) -> usize {
        self.actors.len().saturating_sub(1)
    }
}

/// Walks parent links from `target` back to `start`.
pub fn reconstruct_path<'g>(
    parent_map: &FxHashMap<&'g ActorId, &'g ActorId>,
    start: &'g ActorId,
    target: &'g ActorId,
) -> Vec<ActorId> {
    let mut path = vec![target.clone()];
    let mut current_node = target;

    while current_node != start {
        match parent_map.get(current_node) {
            Some(&parent_node) => {
                path.push(parent_node.clone());
                current_node = parent_node;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
