use crate::graph::CollaborationGraph;
use crate::records::ActorId;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentBucket {
    pub size: usize,
    pub count: usize,
}

/// Component size -> number of components of that size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSizeHistogram {
    sizes: BTreeMap<usize, usize>,
}

impl ComponentSizeHistogram {
    fn record(&mut self, size: usize) {
        *self.sizes.entry(size).or_insert(0) += 1;
    }

    pub fn get(&self, size: usize) -> usize {
        self.sizes.get(&size).copied().unwrap_or(0)
    }

    /// Largest size first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sizes.iter().rev().map(|(&size, &count)| (size, count))
    }

    pub fn buckets(&self) -> Vec<ComponentBucket> {
        self.iter()
            .map(|(size, count)| ComponentBucket { size, count })
            .collect()
    }

    pub fn component_count(&self) -> usize {
        self.sizes.values().sum()
    }

    pub fn total_actors(&self) -> usize {
        self.sizes.iter().map(|(size, count)| size * count).sum()
    }

    pub fn largest(&self) -> Option<usize> {
        self.sizes.keys().next_back().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl Serialize for ComponentSizeHistogram {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.buckets().serialize(serializer)
    }
}

/// Partitions every vertex into connected components and buckets them by size.
/// Edge weights play no part.
pub fn component_sizes(graph: &CollaborationGraph) -> ComponentSizeHistogram {
    let mut histogram = ComponentSizeHistogram::default();
    let mut visited: FxHashSet<&ActorId> = FxHashSet::default();

    for actor in graph.vertices() {
        if visited.contains(actor) {
            continue;
        }
        let size = traverse_component(graph, actor, &mut visited);
        histogram.record(size);
    }

    tracing::debug!(
        components = histogram.component_count(),
        largest = histogram.largest().unwrap_or(0),
        "partitioned collaboration graph"
    );

    histogram
}

fn traverse_component<'g>(
    graph: &'g CollaborationGraph,
    root: &'g ActorId,
    visited: &mut FxHashSet<&'g ActorId>,
) -> usize {
    let mut queue = VecDeque::from([root]);
    visited.insert(root);
    let mut size = 0;

    while let Some(current_actor) = queue.pop_front() {
        size += 1;
        for neighbor_actor in graph.neighbors(current_actor.as_str()) {
            if visited.insert(neighbor_actor) {
                queue.push_back(neighbor_actor);
            }
        }
    }

    size
}
