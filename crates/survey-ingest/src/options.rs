//! Ingest configuration.

use serde::{Deserialize, Serialize};

/// Options controlling how a survey export is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Insert the sequential column-tag row before the two label rows.
    ///
    /// Set this for exports straight from the survey tool, which carry only
    /// the label and item label rows.
    pub prepend_column_tags: bool,
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            prepend_column_tags: false,
            delimiter: b',',
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a raw export that still needs its column-tag row.
    pub fn raw_export() -> Self {
        Self {
            prepend_column_tags: true,
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
