//! CLI command handlers, one per file.

mod completions;
mod map;

pub use completions::run_completions;
pub use map::{run_map, MapOptions};
