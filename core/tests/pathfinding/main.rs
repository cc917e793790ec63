#[path = "../common/mod.rs"]
mod common;

mod batch;
mod bfs;
mod dijkstra;
