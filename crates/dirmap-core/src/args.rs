//! Flat argument set handed over by the CLI and the validated request built from it.

use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::PathBuf;

/// Flag naming the base directory to scan.
pub const PATH_FLAG: &str = "-path";
/// Flag naming the suffix joined onto every discovered directory.
pub const SUB_PATH_FLAG: &str = "-subPath";

/// Mapping from flag name (e.g. `-path`) to its string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSet {
    values: HashMap<String, String>,
}

impl ArgumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `flag` to `value`, replacing any previous value.
    pub fn insert(&mut self, flag: impl Into<String>, value: impl Into<String>) {
        self.values.insert(flag.into(), value.into());
    }

    pub fn get(&self, flag: &str) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.values.contains_key(flag)
    }
}

impl<K, V> FromIterator<(K, V)> for ArgumentSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (flag, value) in iter {
            set.insert(flag, value);
        }
        set
    }
}

/// Validated input for one map build: a base directory and an optional sub-path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRequest {
    pub path: PathBuf,
    /// Kept as given; an empty value means "no suffix" when the map is built.
    pub sub_path: Option<PathBuf>,
}

impl MapRequest {
    /// Build a request from `args`, failing if `-path` is absent.
    pub fn from_args(args: &ArgumentSet) -> Result<Self, ConfigError> {
        let path = args.get(PATH_FLAG).ok_or(ConfigError::MissingPath)?;
        Ok(Self {
            path: PathBuf::from(path),
            sub_path: args.get(SUB_PATH_FLAG).map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_requires_path() {
        let args: ArgumentSet = [(SUB_PATH_FLAG, "build")].into_iter().collect();
        assert_eq!(MapRequest::from_args(&args), Err(ConfigError::MissingPath));
    }

    #[test]
    fn request_with_path_only() {
        let args: ArgumentSet = [(PATH_FLAG, "/srv/builds")].into_iter().collect();
        let req = MapRequest::from_args(&args).unwrap();
        assert_eq!(req.path, PathBuf::from("/srv/builds"));
        assert!(req.sub_path.is_none());
    }

    #[test]
    fn request_with_sub_path() {
        let args: ArgumentSet = [(PATH_FLAG, "/srv/builds"), (SUB_PATH_FLAG, "bin/release")]
            .into_iter()
            .collect();
        let req = MapRequest::from_args(&args).unwrap();
        assert_eq!(req.sub_path, Some(PathBuf::from("bin/release")));
    }

    #[test]
    fn flags_are_case_sensitive() {
        let args: ArgumentSet = [("-Path", "/srv")].into_iter().collect();
        assert!(!args.contains(PATH_FLAG));
        assert_eq!(MapRequest::from_args(&args), Err(ConfigError::MissingPath));
    }

    #[test]
    fn insert_replaces_value() {
        let mut args = ArgumentSet::new();
        args.insert(PATH_FLAG, "a");
        args.insert(PATH_FLAG, "b");
        assert_eq!(args.get(PATH_FLAG), Some("b"));
    }
}
