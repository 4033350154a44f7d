pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod map_builder;
pub mod output;

pub use args::{ArgumentSet, MapRequest};
pub use error::ConfigError;
pub use map_builder::{build_map, collect_dir_map, print_map, DirMap};
pub use output::OutputStyle;
