//! Run configuration shared by the labeling and stage count pipelines.
//!
//! Options use kebab-case keys and may be written as YAML or JSON. Unset
//! options take the defaults below; any key that is neither a known option
//! nor a `<stage>-limit` entry is rejected.
//!
//! | Option | Default |
//! |---|---|
//! | `process-with-label` | `feature` |
//! | `column-label-prefix` | `"> "` |
//! | `linked-label-prefix` | `">> "` |
//! | `label-color` | unset |
//! | `skip-columns` | `[]` |
//! | `write-labels` | `false` |
//! | `report-on-labels` | `["Feature"]` |
//! | `stage-columns` | Proposed, Accepted, In Progress, Done |
//! | `<stage>-limit` | `proposed: 0`, `accepted: 0`, `in-progress: 4`, `done: -1` |

mod error;

pub use error::ConfigError;

use crate::board::domain::LabelKey;
use crate::labeling::domain::{
    DEFAULT_COLUMN_PREFIX, DEFAULT_LINKED_PREFIX, LabelPrefix, LabelRole, RolePrefixes,
};
use crate::labeling::services::SyncMode;
use crate::stages::adapters::default_stage_columns;
use crate::stages::domain::{LIMIT_KEY_SUFFIX, LabelFilterChain, StageLimits, limit_key};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Label a referenced card must carry to be synchronized, by default.
pub const DEFAULT_PROCESS_WITH_LABEL: &str = "feature";

/// Filter chain applied before stage counting, by default.
pub const DEFAULT_REPORT_ON_LABEL: &str = "Feature";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct BoardConfigRecord {
    process_with_label: Option<String>,
    column_label_prefix: Option<String>,
    linked_label_prefix: Option<String>,
    label_color: Option<String>,
    #[serde(default)]
    skip_columns: Vec<String>,
    #[serde(default)]
    write_labels: bool,
    report_on_labels: Option<Vec<String>>,
    stage_columns: Option<IndexMap<String, Vec<String>>>,
    #[serde(flatten)]
    remaining: BTreeMap<String, serde_yaml::Value>,
}

/// Validated, immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    process_with_label: String,
    prefixes: RolePrefixes,
    label_color: Option<String>,
    skip_columns: Vec<LabelKey>,
    write_labels: bool,
    report_on_labels: Vec<String>,
    stage_columns: IndexMap<String, Vec<String>>,
    stage_limits: StageLimits,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            process_with_label: DEFAULT_PROCESS_WITH_LABEL.to_owned(),
            prefixes: RolePrefixes::default(),
            label_color: None,
            skip_columns: Vec::new(),
            write_labels: false,
            report_on_labels: vec![DEFAULT_REPORT_ON_LABEL.to_owned()],
            stage_columns: default_stage_columns(),
            stage_limits: StageLimits::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates configuration text (YAML or JSON).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the text does not parse, names an
    /// unknown option, carries a non-integer limit, or configures empty or
    /// overlapping label prefixes.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        // An empty document means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let record: BoardConfigRecord = serde_yaml::from_str(text)?;
        Self::try_from(record)
    }

    /// Reads and validates the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::MissingFileName(path.to_string()))?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let text = Dir::open_ambient_dir(parent, ambient_authority())
            .and_then(|dir| dir.read_to_string(file_name))
            .map_err(|source| ConfigError::Read {
                path: path.to_string(),
                source,
            })?;
        Self::from_yaml(&text)
    }

    /// Returns a copy with the write flag replaced.
    #[must_use]
    pub fn with_write_labels(mut self, write_labels: bool) -> Self {
        self.write_labels = write_labels;
        self
    }

    /// Returns the label a referenced card must carry to be synchronized.
    #[must_use]
    pub fn process_with_label(&self) -> &str {
        &self.process_with_label
    }

    /// Returns the prefixes for both label roles.
    #[must_use]
    pub const fn prefixes(&self) -> &RolePrefixes {
        &self.prefixes
    }

    /// Returns the color applied to created labels.
    #[must_use]
    pub fn label_color(&self) -> Option<&str> {
        self.label_color.as_deref()
    }

    /// Reports whether cards in `column` bypass reference scanning.
    #[must_use]
    pub fn skips_column(&self, column: &str) -> bool {
        let key = LabelKey::new(column);
        self.skip_columns.contains(&key)
    }

    /// Returns whether label changes are applied.
    #[must_use]
    pub const fn write_labels(&self) -> bool {
        self.write_labels
    }

    /// Returns the synchronization mode implied by `write-labels`.
    #[must_use]
    pub const fn sync_mode(&self) -> SyncMode {
        SyncMode::from_write_flag(self.write_labels)
    }

    /// Returns the label filters applied before stage counting.
    #[must_use]
    pub fn report_on_labels(&self) -> &[String] {
        &self.report_on_labels
    }

    /// Returns the report filters as a chain.
    #[must_use]
    pub fn filter_chain(&self) -> LabelFilterChain {
        LabelFilterChain::new(self.report_on_labels.iter().cloned())
    }

    /// Returns the stage -> columns mapping.
    #[must_use]
    pub const fn stage_columns(&self) -> &IndexMap<String, Vec<String>> {
        &self.stage_columns
    }

    /// Returns the configured stage limits.
    #[must_use]
    pub const fn stage_limits(&self) -> &StageLimits {
        &self.stage_limits
    }
}

impl TryFrom<BoardConfigRecord> for BoardConfig {
    type Error = ConfigError;

    fn try_from(record: BoardConfigRecord) -> Result<Self, Self::Error> {
        let defaults = Self::default();

        let process_with_label = match record.process_with_label {
            Some(label) if label.trim().is_empty() => {
                return Err(ConfigError::EmptyOption("process-with-label"));
            }
            Some(label) => label.trim().to_owned(),
            None => defaults.process_with_label,
        };

        let column = LabelPrefix::new(
            LabelRole::Column,
            record
                .column_label_prefix
                .unwrap_or_else(|| DEFAULT_COLUMN_PREFIX.to_owned()),
        )?;
        let linked = LabelPrefix::new(
            LabelRole::Linked,
            record
                .linked_label_prefix
                .unwrap_or_else(|| DEFAULT_LINKED_PREFIX.to_owned()),
        )?;
        let prefixes = RolePrefixes::new(column, linked)?;

        let label_color = record
            .label_color
            .map(|color| color.trim().to_owned())
            .filter(|color| !color.is_empty());

        let skip_columns = record
            .skip_columns
            .iter()
            .map(|column| LabelKey::new(column))
            .collect();

        let stage_limits = parse_limits(record.remaining, defaults.stage_limits)?;

        Ok(Self {
            process_with_label,
            prefixes,
            label_color,
            skip_columns,
            write_labels: record.write_labels,
            report_on_labels: record
                .report_on_labels
                .unwrap_or(defaults.report_on_labels),
            stage_columns: record.stage_columns.unwrap_or(defaults.stage_columns),
            stage_limits,
        })
    }
}

fn parse_limits(
    remaining: BTreeMap<String, serde_yaml::Value>,
    defaults: StageLimits,
) -> Result<StageLimits, ConfigError> {
    remaining
        .into_iter()
        .try_fold(defaults, |limits, (key, value)| {
            let stage_key = key.strip_suffix(LIMIT_KEY_SUFFIX).map(limit_key);
            let Some(normalized) = stage_key else {
                return Err(ConfigError::UnknownOption(key));
            };
            let Some(limit) = value.as_i64() else {
                return Err(ConfigError::InvalidLimit {
                    key,
                    value: format!("{value:?}"),
                });
            };
            Ok(limits.with_limit(normalized, limit))
        })
}
