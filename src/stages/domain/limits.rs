//! Work-in-progress limits keyed by stage.

use std::collections::BTreeMap;

/// Limit value meaning a stage has no ceiling.
pub const UNBOUNDED_LIMIT: i64 = -1;

/// Limit applied to a stage with no configured entry.
pub const DEFAULT_STAGE_LIMIT: i64 = 0;

/// Suffix shared by every limit option key.
pub const LIMIT_KEY_SUFFIX: &str = "-limit";

/// Returns the option key holding the limit for `stage`.
///
/// The stage name is lowercased and each run of whitespace becomes a single
/// `-`, so `"In Progress"` maps to `"in-progress-limit"`.
#[must_use]
pub fn limit_key(stage: &str) -> String {
    let slug = stage
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}{LIMIT_KEY_SUFFIX}")
}

/// Configured stage limits, keyed by option name (`"{stage}-limit"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageLimits(BTreeMap<String, i64>);

impl StageLimits {
    /// Creates an empty limit table; every stage falls back to
    /// [`DEFAULT_STAGE_LIMIT`].
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets the limit stored under `key`, replacing any previous value.
    #[must_use]
    pub fn with_limit(mut self, key: impl Into<String>, limit: i64) -> Self {
        self.0.insert(key.into(), limit);
        self
    }

    /// Returns the limit configured for `stage`.
    #[must_use]
    pub fn limit_for(&self, stage: &str) -> i64 {
        self.0
            .get(&limit_key(stage))
            .copied()
            .unwrap_or(DEFAULT_STAGE_LIMIT)
    }

    /// Iterates over `(key, limit)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(key, limit)| (key.as_str(), *limit))
    }
}

impl Default for StageLimits {
    fn default() -> Self {
        Self::empty()
            .with_limit("proposed-limit", 0)
            .with_limit("accepted-limit", 0)
            .with_limit("in-progress-limit", 4)
            .with_limit("done-limit", UNBOUNDED_LIMIT)
    }
}

/// Reports whether `count` cards break `limit`.
///
/// Any limit of [`UNBOUNDED_LIMIT`] or below never flags.
#[must_use]
pub fn exceeds_limit(count: usize, limit: i64) -> bool {
    let observed = i64::try_from(count).unwrap_or(i64::MAX);
    limit > UNBOUNDED_LIMIT && observed > limit
}
