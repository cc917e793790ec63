pub mod batch;
pub mod bfs;
pub mod dijkstra;
pub mod utils;

// Re-export the public functions
pub use batch::{PathQuery, find_paths_parallel};
pub use bfs::bfs_find_path;
pub use dijkstra::dijkstra_find_path;
pub use utils::{PathResult, SearchStats};
