//! Error types for configuration loading.

use crate::labeling::domain::LabelingDomainError;
use thiserror::Error;

/// Errors returned while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration path has no file name component.
    #[error("configuration path '{0}' must name a file")]
    MissingFileName(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration '{path}': {source}")]
    Read {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid YAML or JSON.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The option is not recognised.
    #[error("unknown configuration option '{0}'")]
    UnknownOption(String),

    /// A `<stage>-limit` option is not an integer.
    #[error("limit option '{key}' must be an integer, found {value}")]
    InvalidLimit {
        /// Option key.
        key: String,
        /// Offending value.
        value: String,
    },

    /// A required string option is blank.
    #[error("configuration option '{0}' must not be empty")]
    EmptyOption(&'static str),

    /// Label prefixes are empty or collide.
    #[error(transparent)]
    Prefix(#[from] LabelingDomainError),
}
