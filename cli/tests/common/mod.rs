#![allow(dead_code)]

use castpath::{assemble_records, parse_actors, parse_cast_genders, parse_movies};
use castpath_core::RecordStore;
use std::fs;
use tempfile::TempDir;

pub const MOVIES_TSV: &str = "\
tt0000001\tFirst\tLight\t8.0\t1200
tt0000002\tSecond Wind\t2.0\t300
";

pub const ACTORS_TSV: &str = "\
nm0000001\tXena\tStone\ttt0000001
nm0000002\tYara Bell\ttt0000001\ttt0000002
nm0000003\tZoe Park\ttt0000002\ttt9999999
";

pub const CAST_GENDERS_TSV: &str = "\
nm0000001\tXena Stone\t1970\t\\N\tactress,producer\ttt0000001
nm0000002\tYara Bell\t1980\t\\N\tactor\ttt0000001,tt0000002
nm0000003\tZoe Park\t1990\t\\N\tactor\ttt0000002
nm0000009\tExtra One\t1991\t\\N\tactor\ttt0000002
";

pub fn chain_records() -> RecordStore {
    assemble_records(
        parse_movies(MOVIES_TSV).unwrap(),
        parse_actors(ACTORS_TSV).unwrap(),
        Some(parse_cast_genders(CAST_GENDERS_TSV).unwrap()),
    )
}

pub fn write_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("movies.tsv"), MOVIES_TSV).unwrap();
    fs::write(dir.path().join("actors.tsv"), ACTORS_TSV).unwrap();
    fs::write(dir.path().join("genders.tsv"), CAST_GENDERS_TSV).unwrap();
    dir
}
