//! Stage classification by board column name.

use crate::board::domain::Card;
use crate::stages::ports::StageClassifier;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Stage for cards that are not in any column.
pub const NO_COLUMN_STAGE: &str = "No Column";

/// Workflow stages reported when no mapping is configured.
pub const DEFAULT_STAGES: [&str; 4] = ["Proposed", "Accepted", "In Progress", "Done"];

/// Classifies cards by the column they sit in.
///
/// Columns are matched case-insensitively after trimming. A column with no
/// mapping becomes a stage of its own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStageClassifier {
    stages: Vec<String>,
    columns: HashMap<String, String>,
}

impl ColumnStageClassifier {
    /// Creates a classifier from a stage -> columns mapping. Stage order is
    /// kept. When a column is listed under several stages the first wins.
    #[must_use]
    pub fn new(stage_columns: &IndexMap<String, Vec<String>>) -> Self {
        let mut columns = HashMap::new();
        for (stage, stage_column_names) in stage_columns {
            for column in stage_column_names {
                columns
                    .entry(column_key(column))
                    .or_insert_with(|| stage.clone());
            }
        }
        Self {
            stages: stage_columns.keys().cloned().collect(),
            columns,
        }
    }
}

impl Default for ColumnStageClassifier {
    fn default() -> Self {
        Self::new(&default_stage_columns())
    }
}

/// Returns the default mapping: each default stage matches the column of
/// the same name.
#[must_use]
pub fn default_stage_columns() -> IndexMap<String, Vec<String>> {
    DEFAULT_STAGES
        .iter()
        .map(|stage| ((*stage).to_owned(), vec![(*stage).to_owned()]))
        .collect()
}

fn column_key(column: &str) -> String {
    column.trim().to_lowercase()
}

impl StageClassifier for ColumnStageClassifier {
    fn declared_stages(&self) -> Vec<String> {
        self.stages.clone()
    }

    fn classify(&self, card: &Card) -> String {
        let Some(column) = card.column() else {
            return NO_COLUMN_STAGE.to_owned();
        };
        self.columns
            .get(&column_key(column))
            .cloned()
            .unwrap_or_else(|| column.trim().to_owned())
    }
}
