//! Severity label table.
//!
//! The source dataset tags every accident with a French-language severity
//! label; the reduced output carries an integer code instead. The table is
//! a value rather than a constant so other exports of the same layout can
//! supply their own labels via a JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ReduceError, Result};

/// Mapping from severity labels to integer codes, ordered by label.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct SeverityMap {
    labels: BTreeMap<String, u8>,
}

impl SeverityMap {
    /// The Québec accident report table, codes ordered by increasing severity.
    #[must_use]
    pub fn quebec() -> Self {
        let labels = BTreeMap::from([
            ("Dommages matériels seulement".to_string(), 0),
            ("Léger".to_string(), 1),
            ("Grave".to_string(), 2),
            ("Mortel".to_string(), 3),
        ]);
        Self { labels }
    }

    /// Load a table from a JSON object file (`{"label": code, ...}`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON object of
    /// integer codes, or maps no labels at all.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ReduceError::SeverityMapRead {
            path: path.to_path_buf(),
            source,
        })?;
        let map: Self =
            serde_json::from_str(&contents).map_err(|source| ReduceError::SeverityMapParse {
                path: path.to_path_buf(),
                source,
            })?;
        if map.labels.is_empty() {
            return Err(ReduceError::EmptySeverityMap {
                path: path.to_path_buf(),
            });
        }
        Ok(map)
    }

    /// Code for a label, or `None` when the label is not in the table.
    #[must_use]
    pub fn code_for(&self, label: &str) -> Option<u8> {
        self.labels.get(label).copied()
    }

    /// Number of labels in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true when the table maps no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for SeverityMap {
    fn default() -> Self {
        Self::quebec()
    }
}
