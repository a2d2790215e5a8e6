//! Error types for loading rule files.

use std::path::PathBuf;

use saju_engine::RuleSetError;
use thiserror::Error;

/// Errors from loading or resolving a rule set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse rule file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize rule set: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid rule set: {0}")]
    Invalid(RuleSetError),
    #[error("unknown preset {0:?} (expected one of: classic, weighted)")]
    UnknownPreset(String),
    #[error("rule file sets both `preset` and a [rules] table")]
    Ambiguous,
}

impl From<RuleSetError> for ConfigError {
    fn from(e: RuleSetError) -> Self {
        match e {
            RuleSetError::UnknownPreset(name) => Self::UnknownPreset(name),
            other => Self::Invalid(other),
        }
    }
}
