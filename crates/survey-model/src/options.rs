//! Configuration options for survey scoring.

use serde::{Deserialize, Serialize};

/// How much checking is applied to individual item answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemCheckMode {
    /// Only reject values that are not numeric; missing answers are skipped.
    #[default]
    Lenient,
    /// Also reject missing required answers and values outside the item scale.
    Strict,
}

/// Options controlling survey scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOptions {
    pub item_checks: ItemCheckMode,
}

impl ScoringOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with scale and completeness checks on every item.
    pub fn strict() -> Self {
        Self {
            item_checks: ItemCheckMode::Strict,
        }
    }

    pub fn with_item_checks(mut self, mode: ItemCheckMode) -> Self {
        self.item_checks = mode;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.item_checks == ItemCheckMode::Strict
    }
}
