//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or checking `ldpost.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read ldpost config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid ldpost.toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid ldpost.toml value: {0}")]
    Validation(String),
}
