#![allow(dead_code)]

use castpath_core::{Actor, ActorId, Movie, RecordStore};

pub fn movie(id: &str, name: &str, rating: f64, cast_size: u32, female_count: u32) -> Movie {
    Movie {
        id: id.into(),
        name: name.to_string(),
        rating,
        cast_size,
        female_count,
    }
}

pub fn actor(id: &str, name: &str, movies: &[&str]) -> Actor {
    Actor {
        id: id.into(),
        name: name.to_string(),
        movies: movies.iter().map(|&movie_id| movie_id.into()).collect(),
    }
}

pub fn id(raw: &str) -> ActorId {
    ActorId::from(raw)
}

pub fn ids(raw: &[&str]) -> Vec<ActorId> {
    raw.iter().map(|&actor_id| ActorId::from(actor_id)).collect()
}

/// X -[M1: 8.0, 1 of 2 female]- Y -[M2: 2.0, 0 of 3 female]- Z
pub fn chain_store() -> RecordStore {
    RecordStore::new(
        vec![
            movie("tt0000001", "First Light", 8.0, 2, 1),
            movie("tt0000002", "Second Wind", 2.0, 3, 0),
        ],
        vec![
            actor("nm0000001", "Xavier Stone", &["tt0000001"]),
            actor("nm0000002", "Yara Bell", &["tt0000001", "tt0000002"]),
            actor("nm0000003", "Zoe Park", &["tt0000002"]),
        ],
    )
}

/// The chain plus a loner with an unshared film and an actor with no
/// tracked films at all.
pub fn chain_with_loners_store() -> RecordStore {
    RecordStore::new(
        vec![
            movie("tt0000001", "First Light", 8.0, 2, 1),
            movie("tt0000002", "Second Wind", 2.0, 3, 0),
            movie("tt0000003", "Solo Act", 6.5, 1, 0),
        ],
        vec![
            actor("nm0000001", "Xavier Stone", &["tt0000001"]),
            actor("nm0000002", "Yara Bell", &["tt0000001", "tt0000002"]),
            actor("nm0000003", "Zoe Park", &["tt0000002"]),
            actor("nm0000004", "Walt Lone", &["tt0000003"]),
            actor("nm0000005", "Vic Unknown", &["tt9999999"]),
        ],
    )
}

/// Two hops through poorly rated films (A-B-D) versus three hops through
/// well rated ones (A-C-E-D).
pub fn diamond_store() -> RecordStore {
    RecordStore::new(
        vec![
            movie("tt0000010", "Dud One", 1.0, 2, 0),
            movie("tt0000011", "Dud Two", 1.0, 2, 0),
            movie("tt0000012", "Gem One", 9.0, 2, 1),
            movie("tt0000013", "Gem Two", 9.0, 2, 1),
            movie("tt0000014", "Gem Three", 9.0, 2, 1),
        ],
        vec![
            actor("nm0000010", "Ada", &["tt0000010", "tt0000012"]),
            actor("nm0000011", "Ben", &["tt0000010", "tt0000011"]),
            actor("nm0000012", "Cal", &["tt0000012", "tt0000013"]),
            actor("nm0000013", "Dee", &["tt0000011", "tt0000014"]),
            actor("nm0000014", "Eve", &["tt0000013", "tt0000014"]),
        ],
    )
}

/// Two separate pairs.
pub fn disjoint_store() -> RecordStore {
    RecordStore::new(
        vec![
            movie("tt0000020", "Left Side", 7.0, 2, 1),
            movie("tt0000021", "Right Side", 5.0, 2, 0),
        ],
        vec![
            actor("nm0000020", "Lia", &["tt0000020"]),
            actor("nm0000021", "Lou", &["tt0000020"]),
            actor("nm0000022", "Ray", &["tt0000021"]),
            actor("nm0000023", "Rex", &["tt0000021"]),
        ],
    )
}

/// A and B share three films; A lists them in a different order than the
/// movie records do.
pub fn repeat_collaborators_store() -> RecordStore {
    RecordStore::new(
        vec![
            movie("tt0000030", "Opening Night", 9.0, 4, 1),
            movie("tt0000031", "Encore", 3.0, 2, 1),
            movie("tt0000032", "Finale", 9.0, 10, 2),
        ],
        vec![
            actor("nm0000030", "Ana", &["tt0000031", "tt0000032", "tt0000030"]),
            actor("nm0000031", "Bo", &["tt0000032", "tt0000030", "tt0000031"]),
        ],
    )
}
