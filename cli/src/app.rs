use anyhow::{Result, bail};
use castpath_core::RecordStore;
use std::{path::PathBuf, time::Instant};

use crate::args::Args;
use crate::parsing::{
    assemble_records, parse_actors, parse_cast_genders, parse_movies, read_mapped_text,
};

pub struct CastPathApp {
    pub movies_path: PathBuf,
    pub actors_path: PathBuf,
    pub cast_genders_path: Option<PathBuf>,
}

impl CastPathApp {
    pub fn new(args: &Args) -> Result<Self> {
        let data_dir = &args.data_dir;
        if !data_dir.exists() {
            bail!("Data path does not exist: {:?}", data_dir);
        }

        let movies_path = data_dir.join(&args.movies);
        let actors_path = data_dir.join(&args.actors);
        let cast_genders_path = args.cast_genders.as_ref().map(|name| data_dir.join(name));

        if !movies_path.exists() || !actors_path.exists() {
            bail!(
                "Data files not found in {:?}. Expected {} and {}",
                data_dir,
                args.movies,
                args.actors
            );
        }

        if let Some(path) = &cast_genders_path {
            if !path.exists() {
                bail!("Cast gender file not found: {:?}", path);
            }
        }

        Ok(Self {
            movies_path,
            actors_path,
            cast_genders_path,
        })
    }

    pub fn load_records(&self) -> Result<RecordStore> {
        let load_timer = Instant::now();

        let movie_rows = read_mapped_text(&self.movies_path, parse_movies)?;
        let actors = read_mapped_text(&self.actors_path, parse_actors)?;
        let cast_counts = match &self.cast_genders_path {
            Some(path) => Some(read_mapped_text(path, parse_cast_genders)?),
            None => None,
        };

        let store = assemble_records(movie_rows, actors, cast_counts);

        tracing::info!(
            movies = store.movie_count(),
            actors = store.actor_count(),
            elapsed_ms = load_timer.elapsed().as_millis() as u64,
            "loaded records"
        );

        Ok(store)
    }
}
