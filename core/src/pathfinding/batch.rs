use super::{bfs_find_path, dijkstra_find_path, utils::PathResult};
use crate::error::Result;
use crate::graph::{CollaborationGraph, WeightTable};
use crate::pathfinding_config::PathfindingConfig;
use crate::records::ActorId;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathQuery {
    pub source: ActorId,
    pub target: ActorId,
}

impl PathQuery {
    pub fn new(source: impl Into<ActorId>, target: impl Into<ActorId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Runs independent queries across the rayon pool. `None` weights selects
/// BFS. Results keep query order.
pub fn find_paths_parallel(
    graph: &CollaborationGraph,
    weights: Option<&WeightTable>,
    queries: &[PathQuery],
    config: &PathfindingConfig,
) -> Vec<Result<PathResult>> {
    queries
        .par_iter()
        .map(|query| match weights {
            Some(weights) => {
                dijkstra_find_path(graph, weights, &query.source, &query.target, config)
            }
            None => Ok(bfs_find_path(graph, &query.source, &query.target)),
        })
        .collect()
}
