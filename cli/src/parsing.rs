use anyhow::{Context, Result, bail};
use castpath_core::{Actor, Movie, MovieId, RecordStore};
use memmap2::Mmap;
use rustc_hash::FxHashMap;
use std::{fs::File, path::Path};

/// A `movies.tsv` row before cast composition is known.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    pub id: MovieId,
    pub name: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastCount {
    pub total: u32,
    pub female: u32,
}

pub type CastCounts = FxHashMap<MovieId, CastCount>;

pub fn open_memory_mapped_file(file_path: &Path) -> Result<Mmap> {
    let file =
        File::open(file_path).with_context(|| format!("cannot open {}", file_path.display()))?;
    // Data files are read-only inputs for the lifetime of the mapping
    unsafe { Mmap::map(&file) }.with_context(|| format!("cannot map {}", file_path.display()))
}

pub fn read_mapped_text<T>(file_path: &Path, parse: impl FnOnce(&str) -> Result<T>) -> Result<T> {
    let data = open_memory_mapped_file(file_path)?;
    let text = std::str::from_utf8(&data)
        .with_context(|| format!("{} is not valid UTF-8", file_path.display()))?;
    parse(text).with_context(|| format!("failed to parse {}", file_path.display()))
}

/// `id \t title… \t rating \t votes`
pub fn parse_movies(text: &str) -> Result<Vec<MovieRow>> {
    let mut movies = Vec::new();

    for (line_index, line) in data_lines(text) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            bail!(
                "line {}: expected at least 4 columns, found {}",
                line_index + 1,
                fields.len()
            );
        }

        let rating_field = fields[fields.len() - 2].trim();
        let rating = rating_field.parse::<f64>().with_context(|| {
            format!("line {}: invalid rating '{}'", line_index + 1, rating_field)
        })?;

        movies.push(MovieRow {
            id: MovieId::from(fields[0].trim()),
            name: fields[1..fields.len() - 2].join(" "),
            rating,
        });
    }

    Ok(movies)
}

/// `id \t name… \t tt… \t tt…`
pub fn parse_actors(text: &str) -> Result<Vec<Actor>> {
    let mut actors = Vec::new();

    for (line_index, line) in data_lines(text) {
        let fields: Vec<&str> = line.split('\t').collect();
        let id = fields[0].trim();
        if id.is_empty() {
            bail!("line {}: missing actor id", line_index + 1);
        }

        let first_title = fields[1..]
            .iter()
            .position(|field| is_title_id(field))
            .map_or(fields.len(), |position| position + 1);

        actors.push(Actor {
            id: id.into(),
            name: fields[1..first_title].join(" "),
            movies: fields[first_title..]
                .iter()
                .filter(|field| is_title_id(field))
                .map(|field| MovieId::from(field.trim()))
                .collect(),
        });
    }

    Ok(actors)
}

/// One person per line with their profession in the fifth column. Every
/// title id on the line (comma-separated lists allowed) counts toward that
/// movie's cast, and toward its female count for actresses.
pub fn parse_cast_genders(text: &str) -> Result<CastCounts> {
    let mut counts = CastCounts::default();

    for (line_index, line) in data_lines(text) {
        let fields: Vec<&str> = line.split('\t').collect();
        let Some(profession) = fields.get(4) else {
            bail!(
                "line {}: expected a profession column, found {} columns",
                line_index + 1,
                fields.len()
            );
        };
        let is_actress = profession.trim_start().starts_with("actr");

        for title in fields
            .iter()
            .flat_map(|field| field.split(','))
            .filter(|title| is_title_id(title))
        {
            let count = counts.entry(MovieId::from(title.trim())).or_default();
            count.total += 1;
            if is_actress {
                count.female += 1;
            }
        }
    }

    Ok(counts)
}

/// Without gender data, cast size is the number of actor records crediting
/// the movie and nobody is counted as female.
pub fn count_credits(actors: &[Actor]) -> CastCounts {
    let mut counts = CastCounts::default();
    for actor in actors {
        for movie_id in &actor.movies {
            counts.entry(movie_id.clone()).or_default().total += 1;
        }
    }
    counts
}

pub fn assemble_records(
    movie_rows: Vec<MovieRow>,
    actors: Vec<Actor>,
    cast_counts: Option<CastCounts>,
) -> RecordStore {
    let cast_counts = cast_counts.unwrap_or_else(|| count_credits(&actors));

    let movies = movie_rows
        .into_iter()
        .map(|row| {
            let count = cast_counts.get(&row.id).copied().unwrap_or_default();
            Movie {
                id: row.id,
                name: row.name,
                rating: row.rating,
                cast_size: count.total,
                female_count: count.female,
            }
        })
        .collect();

    RecordStore::new(movies, actors)
}

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn is_title_id(field: &str) -> bool {
    field.trim().starts_with("tt")
}
