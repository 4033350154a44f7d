//! `dirmap map` – print the subdirectory map of --path.

use anyhow::Result;
use dirmap_core::args::{PATH_FLAG, SUB_PATH_FLAG};
use dirmap_core::config::DirmapConfig;
use dirmap_core::map_builder::print_map_with;
use dirmap_core::{ArgumentSet, OutputStyle};
use std::io;

/// Flags given to `dirmap map`.
#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    pub path: Option<String>,
    pub sub_path: Option<String>,
    pub pretty: bool,
}

/// Flags win over config values; `path` is left for the core to validate.
pub fn to_argument_set(cfg: &DirmapConfig, opts: &MapOptions) -> ArgumentSet {
    let mut args = ArgumentSet::new();
    if let Some(path) = &opts.path {
        args.insert(PATH_FLAG, path.as_str());
    }
    if let Some(sub) = opts.sub_path.as_ref().or(cfg.sub_path.as_ref()) {
        args.insert(SUB_PATH_FLAG, sub.as_str());
    }
    args
}

pub fn output_style(cfg: &DirmapConfig, opts: &MapOptions) -> OutputStyle {
    if opts.pretty {
        OutputStyle::Pretty
    } else {
        cfg.output_style()
    }
}

pub fn run_map(cfg: &DirmapConfig, opts: MapOptions) -> Result<()> {
    let args = to_argument_set(cfg, &opts);
    let style = output_style(cfg, &opts);
    tracing::info!(path = ?opts.path, sub_path = ?args.get(SUB_PATH_FLAG), "map");
    print_map_with(&args, style, &mut io::stdout().lock())
}
