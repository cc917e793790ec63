use crate::string_normalization::clean_str;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// IMDb-style person key (`nm…`).
    ActorId
);
string_id!(
    /// IMDb-style title key (`tt…`).
    MovieId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    /// Filmography in credit order. May reference untracked movies.
    pub movies: Vec<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub rating: f64,
    pub cast_size: u32,
    pub female_count: u32,
}

pub type NameLookup = FxHashMap<String, Vec<ActorId>>;

/// Read-only view over the loaded actor and movie records.
///
/// Both collections keep their input order; that order drives graph
/// construction and the annotator's tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    movies: Vec<Movie>,
    actors: Vec<Actor>,
    movie_positions: FxHashMap<MovieId, usize>,
    actor_positions: FxHashMap<ActorId, usize>,
    casts: FxHashMap<MovieId, Vec<ActorId>>,
}

impl RecordStore {
    pub fn new(movies: Vec<Movie>, actors: Vec<Actor>) -> Self {
        let movie_positions: FxHashMap<MovieId, usize> = movies
            .iter()
            .enumerate()
            .map(|(position, movie)| (movie.id.clone(), position))
            .collect();

        let actor_positions = actors
            .iter()
            .enumerate()
            .map(|(position, actor)| (actor.id.clone(), position))
            .collect();

        let casts = build_cast_index(&actors, &movie_positions);

        Self {
            movies,
            actors,
            movie_positions,
            actor_positions,
            casts,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movie_positions.get(id).map(|&position| &self.movies[position])
    }

    pub fn actor(&self, id: &str) -> Option<&Actor> {
        self.actor_positions.get(id).map(|&position| &self.actors[position])
    }

    pub fn movie_position(&self, id: &str) -> Option<usize> {
        self.movie_positions.get(id).copied()
    }

    /// Actors credited in a tracked movie, in actor-record order.
    pub fn cast_of(&self, movie_id: &str) -> &[ActorId] {
        self.casts.get(movie_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether any tracked movie records a female cast member. Without this
    /// every gender-ratio cost is 1.0 and the metric degrades to hop count.
    pub fn has_gender_data(&self) -> bool {
        self.movies.iter().any(|movie| movie.female_count > 0)
    }

    pub fn name_lookup(&self) -> NameLookup {
        let mut lookup = NameLookup::default();
        for actor in &self.actors {
            lookup
                .entry(clean_str(&actor.name))
                .or_default()
                .push(actor.id.clone());
        }
        lookup
    }
}

fn build_cast_index(
    actors: &[Actor],
    movie_positions: &FxHashMap<MovieId, usize>,
) -> FxHashMap<MovieId, Vec<ActorId>> {
    let mut casts: FxHashMap<MovieId, Vec<ActorId>> = FxHashMap::default();

    for actor in actors {
        let mut credited = FxHashSet::default();
        for movie_id in &actor.movies {
            if !movie_positions.contains_key(movie_id) || !credited.insert(movie_id) {
                continue;
            }
            casts
                .entry(movie_id.clone())
                .or_default()
                .push(actor.id.clone());
        }
    }

    casts
}
