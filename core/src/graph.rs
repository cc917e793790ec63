use crate::metric::{Metric, WeightPolicy};
use crate::records::{ActorId, Movie, RecordStore};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Build statistics, reported alongside the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertices: usize,
    /// Counted once per neighbor first inserted under each source actor.
    pub edges: usize,
    /// Filmography entries pointing at movies outside the movie set.
    pub skipped_references: usize,
    pub build_ms: u64,
}

/// Directed per-pair costs for one metric.
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    metric: Metric,
    policy: WeightPolicy,
    weights: FxHashMap<ActorId, FxHashMap<ActorId, f64>>,
}

impl WeightTable {
    pub fn new(metric: Metric, policy: WeightPolicy) -> Self {
        Self {
            metric,
            policy,
            weights: FxHashMap::default(),
        }
    }

    /// Derives a table for `metric` over the same collaborations the
    /// builder would visit, without touching adjacency.
    pub fn derive(store: &RecordStore, metric: Metric, policy: WeightPolicy) -> Self {
        let mut table = Self::new(metric, policy);
        for_each_collaboration(store, policy, |actor, co_star, movie| {
            if let Some(cost) = metric.movie_cost(movie) {
                table.record(actor, co_star, cost);
            }
        });
        table
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn policy(&self) -> WeightPolicy {
        self.policy
    }

    pub fn record(&mut self, from: &ActorId, to: &ActorId, cost: f64) {
        let row = self.weights.entry(from.clone()).or_default();
        match row.get_mut(to) {
            Some(existing) => *existing = self.policy.combine(*existing, cost),
            None => {
                row.insert(to.clone(), cost);
            }
        }
    }

    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.weights.get(from).and_then(|row| row.get(to)).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.values().map(FxHashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Undirected co-star graph plus the weight table of the metric it was
/// built for. Immutable once built.
#[derive(Debug, Clone)]
pub struct CollaborationGraph {
    vertices: Vec<ActorId>,
    adjacency: FxHashMap<ActorId, FxHashSet<ActorId>>,
    weights: WeightTable,
    stats: GraphStats,
}

impl CollaborationGraph {
    pub fn metric(&self) -> Metric {
        self.weights.metric
    }

    /// Every actor record, in record order.
    pub fn vertices(&self) -> &[ActorId] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.stats.edges
    }

    pub fn stats(&self) -> GraphStats {
        self.stats
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn contains(&self, actor: &str) -> bool {
        self.adjacency.contains_key(actor)
    }

    pub fn neighbors<'g>(&'g self, actor: &str) -> impl Iterator<Item = &'g ActorId> + use<'g> {
        self.adjacency.get(actor).into_iter().flatten()
    }

    pub fn degree(&self, actor: &str) -> usize {
        self.adjacency.get(actor).map_or(0, FxHashSet::len)
    }

    pub fn are_adjacent(&self, first: &str, second: &str) -> bool {
        self.adjacency
            .get(first)
            .is_some_and(|neighbors| neighbors.contains(second))
    }
}

pub struct GraphBuilder<'a> {
    store: &'a RecordStore,
    metric: Metric,
    policy: WeightPolicy,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            metric: Metric::default(),
            policy: WeightPolicy::default(),
        }
    }

    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn policy(mut self, policy: WeightPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> CollaborationGraph {
        let build_timer = Instant::now();
        let mut vertices = Vec::with_capacity(self.store.actor_count());
        let mut adjacency: FxHashMap<ActorId, FxHashSet<ActorId>> =
            FxHashMap::with_capacity_and_hasher(self.store.actor_count(), Default::default());
        let mut weights = WeightTable::new(self.metric, self.policy);
        let mut edges = 0;

        for actor in self.store.actors() {
            if adjacency.insert(actor.id.clone(), FxHashSet::default()).is_none() {
                vertices.push(actor.id.clone());
            }
        }

        let metric = self.metric;
        let skipped_references =
            for_each_collaboration(self.store, self.policy, |actor, co_star, movie| {
                if adjacency
                    .entry(actor.clone())
                    .or_default()
                    .insert(co_star.clone())
                {
                    edges += 1;
                }
                if let Some(cost) = metric.movie_cost(movie) {
                    weights.record(actor, co_star, cost);
                }
            });

        let stats = GraphStats {
            vertices: vertices.len(),
            edges,
            skipped_references,
            build_ms: build_timer.elapsed().as_millis() as u64,
        };

        tracing::debug!(
            metric = self.metric.as_str(),
            policy = self.policy.as_str(),
            vertices = stats.vertices,
            edges = stats.edges,
            skipped = stats.skipped_references,
            elapsed_ms = stats.build_ms,
            "built collaboration graph"
        );

        CollaborationGraph {
            vertices,
            adjacency,
            weights,
            stats,
        }
    }
}

pub fn build_graph(store: &RecordStore, metric: Metric) -> CollaborationGraph {
    GraphBuilder::new(store).metric(metric).build()
}

/// Visits every (actor, co-star, movie) triple in construction order,
/// skipping self-credits. A filmography entry listed twice is revisited, so
/// the last occurrence decides the weight under `KeepLast`; only `KeepSum`
/// visits each movie once per actor. Returns how many filmography entries
/// pointed at untracked movies.
fn for_each_collaboration<F>(store: &RecordStore, policy: WeightPolicy, mut visit: F) -> usize
where
    F: FnMut(&ActorId, &ActorId, &Movie),
{
    let skip_repeats = policy == WeightPolicy::KeepSum;
    let mut skipped = 0;
    for actor in store.actors() {
        let mut seen = FxHashSet::default();
        for movie_id in &actor.movies {
            let Some(movie) = store.movie(movie_id.as_str()) else {
                skipped += 1;
                continue;
            };
            if skip_repeats && !seen.insert(movie_id) {
                continue;
            }
            for co_star in store.cast_of(movie_id.as_str()) {
                if co_star != &actor.id {
                    visit(&actor.id, co_star, movie);
                }
            }
        }
    }
    skipped
}
