//! Map the immediate subdirectories of a base directory to their paths.
//!
//! Listing is one level deep and follows symlinks when deciding whether an
//! entry is a directory. A base path that cannot be listed (missing, not a
//! directory, unreadable) produces an empty map instead of an error.

use crate::args::{ArgumentSet, MapRequest};
use crate::output::{self, OutputStyle};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Sanitized directory name -> resolved path.
pub type DirMap = BTreeMap<String, String>;

/// Remove every `"` from a directory name before it becomes a map key.
pub fn sanitize_name(name: &str) -> String {
    name.replace('"', "")
}

/// Collect the map for `base`, joining `sub_path` onto each entry when it is non-empty.
pub fn collect_dir_map(base: &Path, sub_path: Option<&Path>) -> DirMap {
    let sub_path = sub_path.filter(|p| !p.as_os_str().is_empty());
    let mut map = DirMap::new();

    let Ok(entries) = fs::read_dir(base) else {
        tracing::warn!(path = %base.display(), "base path is not a readable directory; map is empty");
        return map;
    };

    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let name = sanitize_name(&entry.file_name().to_string_lossy());
        let mut value = base.join(&name);
        if let Some(sub) = sub_path {
            value = value.join(sub);
        }
        map.insert(name, value.to_string_lossy().into_owned());
    }

    tracing::debug!(path = %base.display(), entries = map.len(), "collected directory map");
    map
}

/// Build the compact JSON map for `base`.
pub fn build_map(base: &Path, sub_path: Option<&Path>) -> Result<String> {
    build_map_with(base, sub_path, OutputStyle::Compact)
}

/// Build the JSON map for `base` in the given style.
pub fn build_map_with(base: &Path, sub_path: Option<&Path>, style: OutputStyle) -> Result<String> {
    let map = collect_dir_map(base, sub_path);
    output::to_json(&map, style)
}

/// Validate `args`, build the map, and write it to `out` followed by a newline.
///
/// Fails with [`crate::ConfigError::MissingPath`] (inside the `anyhow::Error`)
/// when `-path` is absent; nothing is written in that case.
pub fn print_map<W: Write>(args: &ArgumentSet, out: &mut W) -> Result<()> {
    print_map_with(args, OutputStyle::Compact, out)
}

pub fn print_map_with<W: Write>(args: &ArgumentSet, style: OutputStyle, out: &mut W) -> Result<()> {
    let req = MapRequest::from_args(args)?;
    let json = build_map_with(&req.path, req.sub_path.as_deref(), style)?;
    writeln!(out, "{json}").context("write directory map")?;
    out.flush().context("flush directory map")?;
    Ok(())
}
