//! Loading crawled board snapshots from disk.

use crate::board::domain::Card;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading a board snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot path has no file name component.
    #[error("snapshot path '{0}' must name a file")]
    MissingFileName(String),

    /// The snapshot file could not be read.
    #[error("failed to read snapshot '{path}': {source}")]
    Read {
        /// Path that failed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not a valid card list.
    #[error("failed to parse snapshot '{path}': {source}")]
    Parse {
        /// Path that failed.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Cards captured by a board crawl.
///
/// Accepts either `{"cards": [...]}` or a bare JSON array of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SnapshotRecord")]
pub struct BoardSnapshot {
    /// Cards in board order.
    pub cards: Vec<Card>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotRecord {
    Wrapped { cards: Vec<Card> },
    Bare(Vec<Card>),
}

impl From<SnapshotRecord> for BoardSnapshot {
    fn from(record: SnapshotRecord) -> Self {
        match record {
            SnapshotRecord::Wrapped { cards } | SnapshotRecord::Bare(cards) => Self { cards },
        }
    }
}

impl BoardSnapshot {
    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the text is not a valid snapshot.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads and parses the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the file cannot be read or parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, SnapshotError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| SnapshotError::MissingFileName(path.to_string()))?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let text = Dir::open_ambient_dir(parent, ambient_authority())
            .and_then(|dir| dir.read_to_string(file_name))
            .map_err(|source| SnapshotError::Read {
                path: path.to_string(),
                source,
            })?;
        Self::from_json(&text).map_err(|source| SnapshotError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
