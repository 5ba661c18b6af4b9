//! Error types for labeling domain validation.

use thiserror::Error;

/// Errors returned while constructing labeling values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelingDomainError {
    /// The prefix is empty after trimming; it would match every label.
    #[error("label prefix for {role} labels must not be empty")]
    EmptyPrefix {
        /// Role the prefix was configured for.
        role: String,
    },

    /// One role prefix is a string-prefix of the other, so removal for one
    /// role would strip labels belonging to the other.
    #[error("label prefixes overlap: '{first}' and '{second}'")]
    OverlappingPrefixes {
        /// Column role prefix.
        first: String,
        /// Linked role prefix.
        second: String,
    },
}
