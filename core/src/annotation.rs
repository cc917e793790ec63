use crate::error::{CastpathError, Result};
use crate::metric::{Metric, gender_ratio_cost};
use crate::records::{ActorId, Movie, MovieId, RecordStore};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// One step of a resolved path and the film reported for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedHop {
    pub from: ActorId,
    pub to: ActorId,
    pub movie: MovieId,
    pub movie_name: String,
    pub rating: f64,
    pub female_count: u32,
    pub gender_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PathAnnotation {
    pub hops: Vec<AnnotatedHop>,
    /// Sum of the chosen films' female cast counts.
    pub total_female: u32,
}

#[derive(Debug, Clone, Copy)]
enum HopSelection {
    HighestRating,
    LowestGenderRatio,
}

impl HopSelection {
    fn prefers(&self, candidate: &Movie, current: &Movie) -> bool {
        match self {
            HopSelection::HighestRating => candidate.rating > current.rating,
            HopSelection::LowestGenderRatio => {
                gender_ratio_cost(candidate) < gender_ratio_cost(current)
            }
        }
    }
}

/// Re-derives the connecting film for each hop of a path.
///
/// This is independent of the weight used during search: the annotator
/// always scans every shared movie and keeps the first one that is best under
/// the selection rule, in movie-record order.
pub struct PathAnnotator<'a> {
    store: &'a RecordStore,
}

impl<'a> PathAnnotator<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Best-rated shared film per hop.
    pub fn best_rated(&self, path: &[ActorId]) -> Result<PathAnnotation> {
        self.annotate(path, HopSelection::HighestRating)
    }

    /// Shared film with the lowest gender-ratio cost per hop.
    pub fn most_female_inclusive(&self, path: &[ActorId]) -> Result<PathAnnotation> {
        self.annotate(path, HopSelection::LowestGenderRatio)
    }

    pub fn for_metric(&self, metric: Metric, path: &[ActorId]) -> Result<PathAnnotation> {
        match metric {
            Metric::Unweighted | Metric::Rating => self.best_rated(path),
            Metric::GenderRatio => self.most_female_inclusive(path),
        }
    }

    fn annotate(&self, path: &[ActorId], selection: HopSelection) -> Result<PathAnnotation> {
        let credits = self.credits_along(path);
        let mut annotation = PathAnnotation::default();

        for pair in path.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let movie = self
                .select_shared_movie(&credits, from, to, selection)
                .ok_or_else(|| CastpathError::NoSharedMovie {
                    from: from.clone(),
                    to: to.clone(),
                })?;

            annotation.total_female += movie.female_count;
            annotation.hops.push(AnnotatedHop {
                from: from.clone(),
                to: to.clone(),
                movie: movie.id.clone(),
                movie_name: movie.name.clone(),
                rating: movie.rating,
                female_count: movie.female_count,
                gender_ratio: gender_ratio_cost(movie),
            });
        }

        Ok(annotation)
    }

    /// Tracked movie positions for every actor on the path, built once per
    /// query so each hop is an intersection rather than a catalogue scan.
    fn credits_along(&self, path: &[ActorId]) -> FxHashMap<&'a ActorId, FxHashSet<usize>> {
        let mut credits = FxHashMap::default();
        for actor_id in path {
            let Some(actor) = self.store.actor(actor_id.as_str()) else {
                continue;
            };
            let positions = actor
                .movies
                .iter()
                .filter_map(|movie_id| self.store.movie_position(movie_id.as_str()))
                .collect();
            credits.insert(&actor.id, positions);
        }
        credits
    }

    fn select_shared_movie(
        &self,
        credits: &FxHashMap<&'a ActorId, FxHashSet<usize>>,
        from: &ActorId,
        to: &ActorId,
        selection: HopSelection,
    ) -> Option<&'a Movie> {
        let (from_credits, to_credits) = (credits.get(from)?, credits.get(to)?);
        let mut shared: Vec<usize> = from_credits.intersection(to_credits).copied().collect();
        shared.sort_unstable();

        let movies = self.store.movies();
        shared
            .into_iter()
            .map(|position| &movies[position])
            .fold(None, |best: Option<&'a Movie>, candidate| match best {
                Some(current) if !selection.prefers(candidate, current) => Some(current),
                _ => Some(candidate),
            })
    }
}
