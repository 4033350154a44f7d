//! Typed configuration errors raised before any directory is touched.

use thiserror::Error;

/// The argument set cannot be turned into a map request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `-path` was not supplied.
    #[error("No 'path' for map builder provided")]
    MissingPath,
}
