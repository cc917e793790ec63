use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "castpath")]
#[command(about = "Find shortest, chillest and least-sexistic paths between actors")]
pub struct Args {
    /// Directory holding the record files
    #[arg(long, global = true, env = "CASTPATH_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Movie records file, relative to the data directory
    #[arg(long, global = true, default_value = "movies.tsv")]
    pub movies: String,

    /// Actor records file, relative to the data directory
    #[arg(long, global = true, default_value = "actors.tsv")]
    pub actors: String,

    /// Optional per-person profession file used for cast gender counts
    #[arg(long, global = true, env = "CASTPATH_CAST_GENDERS")]
    pub cast_genders: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print vertex and edge counts of the collaboration graph
    Stats,

    /// Find a path between two actors, given by id or name
    Path {
        from: String,
        to: String,

        /// unweighted (fewest hops), rating (chillest) or gender (least sexistic)
        #[arg(short, long, default_value = "unweighted")]
        metric: String,

        /// How repeated collaborations combine: last, min or sum
        #[arg(short, long, default_value = "last")]
        policy: String,

        /// Abort weighted searches after this many milliseconds
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,

        /// Quiet mode - only show the path flow
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the connected component size histogram
    Components,

    /// Run every metric for each actor pair in a file and write a report
    Report {
        /// Tab-separated actor id pairs, one per line
        pairs: PathBuf,

        #[arg(short, long, default_value = "report.txt")]
        output: PathBuf,
    },
}
