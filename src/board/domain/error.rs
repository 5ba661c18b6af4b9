//! Error types for board snapshot validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The card URL could not be parsed.
    #[error("invalid card url '{value}': {reason}")]
    InvalidCardUrl {
        /// Raw value that failed to parse.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The card URL is not an `http` or `https` URL.
    #[error("unsupported card url scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    /// The card title is empty after trimming.
    #[error("card title must not be empty")]
    EmptyCardTitle,
}
