pub mod annotation;
pub mod components;
pub mod error;
pub mod graph;
pub mod metric;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod records;
pub mod string_normalization;

// Re-export commonly used items
pub use annotation::{AnnotatedHop, PathAnnotation, PathAnnotator};
pub use components::{ComponentBucket, ComponentSizeHistogram, component_sizes};
pub use error::{AbortReason, CastpathError, Result};
pub use graph::{CollaborationGraph, GraphBuilder, GraphStats, WeightTable, build_graph};
pub use metric::{Metric, WeightPolicy, gender_ratio_cost, rating_cost};
pub use pathfinding::{
    PathQuery, PathResult, SearchStats, bfs_find_path, dijkstra_find_path, find_paths_parallel,
};
pub use pathfinding_config::PathfindingConfig;
pub use records::{Actor, ActorId, Movie, MovieId, NameLookup, RecordStore};
