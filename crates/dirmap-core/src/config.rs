use crate::output::OutputStyle;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional user configuration from `~/.config/dirmap/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirmapConfig {
    /// Output layout: "compact" (default) or "pretty".
    #[serde(default)]
    pub style: Option<OutputStyle>,
    /// Sub-path joined onto every directory when the CLI does not pass one.
    #[serde(default)]
    pub sub_path: Option<String>,
}

impl DirmapConfig {
    pub fn output_style(&self) -> OutputStyle {
        self.style.unwrap_or_default()
    }
}

/// Existing config file under the XDG config dirs, if any.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dirmap")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from disk; a missing file yields defaults and is not created.
pub fn load() -> Result<DirmapConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => Ok(DirmapConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<DirmapConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(DirmapConfig::default());
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: DirmapConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = DirmapConfig::default();
        assert!(cfg.style.is_none());
        assert!(cfg.sub_path.is_none());
        assert_eq!(cfg.output_style(), OutputStyle::Compact);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = DirmapConfig {
            style: Some(OutputStyle::Pretty),
            sub_path: Some("bin/release".to_string()),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DirmapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_file() {
        let cfg: DirmapConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, DirmapConfig::default());
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg, DirmapConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn load_from_custom_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "style = \"pretty\"\nsub_path = \"out\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.output_style(), OutputStyle::Pretty);
        assert_eq!(cfg.sub_path.as_deref(), Some("out"));
    }

    #[test]
    fn load_from_rejects_unknown_style() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "style = \"yaml\"\n").unwrap();
        assert!(load_from(&path).is_err());
    }
}
