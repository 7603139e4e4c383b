//! Questionnaire instruments and their column blocks.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// Instruments present in the survey export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Instrument {
    /// Patient Health Questionnaire (depression).
    Phq,
    /// Beck Anxiety Inventory.
    Bai,
    /// Obsessive-Compulsive Inventory, Revised.
    Oci,
    /// State-Trait Anxiety Inventory, trait form.
    Stai,
    /// Big Five Inventory.
    Bfi,
    /// Alcohol, Smoking and Substance Involvement Screening Test.
    Assist,
}

impl Instrument {
    pub const ALL: [Instrument; 6] = [
        Instrument::Phq,
        Instrument::Bai,
        Instrument::Oci,
        Instrument::Stai,
        Instrument::Bfi,
        Instrument::Assist,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Instrument::Phq => "PHQ-9",
            Instrument::Bai => "BAI",
            Instrument::Oci => "OCI-R",
            Instrument::Stai => "STAI",
            Instrument::Bfi => "BFI",
            Instrument::Assist => "ASSIST",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Instrument::Phq => "Patient Health Questionnaire",
            Instrument::Bai => "Beck Anxiety Inventory",
            Instrument::Oci => "Obsessive-Compulsive Inventory, Revised",
            Instrument::Stai => "State-Trait Anxiety Inventory (trait)",
            Instrument::Bfi => "Big Five Inventory",
            Instrument::Assist => "Alcohol, Smoking and Substance Involvement Screening Test",
        }
    }

    /// Number of columns the instrument occupies in the export.
    ///
    /// PHQ counts its nine symptom items plus the difficulty question. ASSIST
    /// counts questions 1-7 across the nine substances.
    pub fn column_count(self) -> usize {
        match self {
            Instrument::Phq => 10,
            Instrument::Bai => 21,
            Instrument::Oci => 18,
            Instrument::Stai => 20,
            Instrument::Bfi => 44,
            Instrument::Assist => 63,
        }
    }

    /// Valid answer scale for a single item, when the instrument uses one.
    pub fn item_scale(self) -> Option<ItemScale> {
        match self {
            Instrument::Phq | Instrument::Stai => Some(ItemScale::new(0.0, 3.0)),
            Instrument::Bai | Instrument::Oci => Some(ItemScale::new(0.0, 4.0)),
            Instrument::Bfi => Some(ItemScale::new(1.0, 5.0)),
            Instrument::Assist => None,
        }
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Inclusive bounds of a Likert-style answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemScale {
    pub min: f64,
    pub max: f64,
}

impl ItemScale {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Inclusive column block of one instrument, resolved from header labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentRange {
    instrument: Instrument,
    start: usize,
    end: usize,
}

impl InstrumentRange {
    /// Builds a range, rejecting an end column before the start column.
    pub fn new(instrument: Instrument, start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(ScoringError::InvertedRange {
                instrument,
                start,
                end,
            });
        }
        Ok(Self {
            instrument,
            start,
            end,
        })
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of columns, both ends included.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`: `new` guarantees `start <= end`, so a range holds at
    /// least its start column.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn columns(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Absolute column of the item at `offset` from the start.
    pub fn column(&self, offset: usize) -> usize {
        self.start + offset
    }

    /// Fails unless the block holds exactly the instrument's column count.
    pub fn expect_len(self, expected: usize) -> Result<Self> {
        if self.len() != expected {
            return Err(ScoringError::UnexpectedItemCount {
                instrument: self.instrument,
                expected,
                found: self.len(),
            });
        }
        Ok(self)
    }
}
