pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod parsing;
pub mod report;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::CastPathApp;
pub use args::{Args, Command};
pub use parsing::{assemble_records, parse_actors, parse_cast_genders, parse_movies};
pub use search::find_best_actor_match;
pub use utils::format_number;
