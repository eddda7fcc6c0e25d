use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrevError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("config file not found in config directory {0}")]
    ConfigNotFound(String),

    #[error("could not determine config directory")]
    NoConfigDir,

    /// A pattern that matched during rule scanning must also compile during
    /// rendering; hitting this variant means that invariant was broken.
    #[error("invalid regex {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, BrevError>;
