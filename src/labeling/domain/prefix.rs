//! Label roles and the prefixes that scope them.

use super::LabelingDomainError;
use serde::Serialize;
use std::fmt;

/// Prefix for column-derived labels when none is configured.
pub const DEFAULT_COLUMN_PREFIX: &str = "> ";

/// Prefix for title-derived labels when none is configured.
pub const DEFAULT_LINKED_PREFIX: &str = ">> ";

/// Semantic role a synchronized label plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelRole {
    /// Derived from the board column of the source card (an initiative).
    Column,
    /// Derived from the title of the source card (an epic).
    Linked,
}

impl LabelRole {
    /// Returns the role name in canonical lowercase form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Linked => "linked",
        }
    }
}

impl fmt::Display for LabelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Non-empty literal marking which labels belong to a role.
///
/// Leading whitespace is dropped on construction, since label names are
/// trimmed before matching. The stored value is used for prefix matching;
/// the trimmed value starts every derived label name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelPrefix(String);

impl LabelPrefix {
    /// Creates a validated prefix for `role`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelingDomainError::EmptyPrefix`] when the value is empty
    /// after trimming.
    pub fn new(role: LabelRole, value: impl Into<String>) -> Result<Self, LabelingDomainError> {
        let raw = value.into();
        let normalized = raw.trim_start();
        if normalized.is_empty() {
            return Err(LabelingDomainError::EmptyPrefix {
                role: role.to_string(),
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the prefix used for matching, without leading whitespace.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the prefix without surrounding whitespace.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.0.trim()
    }

    /// Reports whether a label name belongs to this prefix.
    #[must_use]
    pub fn matches(&self, label_name: &str) -> bool {
        label_name.trim().starts_with(self.0.as_str())
    }
}

impl fmt::Display for LabelPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Prefixes for both label roles, validated not to collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePrefixes {
    column: LabelPrefix,
    linked: LabelPrefix,
}

impl RolePrefixes {
    /// Pairs the column and linked prefixes.
    ///
    /// # Errors
    ///
    /// Returns [`LabelingDomainError::OverlappingPrefixes`] when either
    /// prefix starts with the other.
    pub fn new(column: LabelPrefix, linked: LabelPrefix) -> Result<Self, LabelingDomainError> {
        if column.as_str().starts_with(linked.as_str())
            || linked.as_str().starts_with(column.as_str())
        {
            return Err(LabelingDomainError::OverlappingPrefixes {
                first: column.0,
                second: linked.0,
            });
        }
        Ok(Self { column, linked })
    }

    /// Returns the prefix for `role`.
    #[must_use]
    pub const fn for_role(&self, role: LabelRole) -> &LabelPrefix {
        match role {
            LabelRole::Column => &self.column,
            LabelRole::Linked => &self.linked,
        }
    }
}

impl Default for RolePrefixes {
    fn default() -> Self {
        Self {
            column: LabelPrefix(DEFAULT_COLUMN_PREFIX.to_owned()),
            linked: LabelPrefix(DEFAULT_LINKED_PREFIX.to_owned()),
        }
    }
}
