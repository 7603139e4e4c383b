//! ASSIST substance catalog.

use serde::{Deserialize, Serialize};

/// Substances in the order the export lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubstanceKind {
    Tobacco,
    Alcohol,
    Cannabis,
    Stimulants,
    Inhalants,
    Sedatives,
    Hallucinogens,
    Opioids,
    /// Free-text "other" substance.
    Other,
}

impl SubstanceKind {
    pub const ALL: [SubstanceKind; 9] = [
        SubstanceKind::Tobacco,
        SubstanceKind::Alcohol,
        SubstanceKind::Cannabis,
        SubstanceKind::Stimulants,
        SubstanceKind::Inhalants,
        SubstanceKind::Sedatives,
        SubstanceKind::Hallucinogens,
        SubstanceKind::Opioids,
        SubstanceKind::Other,
    ];

    /// Kind at a zero-based catalog position.
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubstanceKind::Tobacco => "tobacco",
            SubstanceKind::Alcohol => "alcohol",
            SubstanceKind::Cannabis => "cannabis",
            SubstanceKind::Stimulants => "amphetamine-type stimulants",
            SubstanceKind::Inhalants => "inhalants",
            SubstanceKind::Sedatives => "sedatives",
            SubstanceKind::Hallucinogens => "hallucinogens",
            SubstanceKind::Opioids => "opioids",
            SubstanceKind::Other => "other",
        }
    }
}

/// One catalog entry: its kind, header name and question-1 column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substance {
    pub kind: SubstanceKind,
    /// Name as written in the item label row; used as the output column name.
    pub name: String,
    /// Column of question 1 ("ever used") for this substance.
    pub base_column: usize,
}

/// The nine substances of one export, in export order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceCatalog {
    substances: Vec<Substance>,
}

impl SubstanceCatalog {
    /// Builds the catalog from header names and their question-1 columns.
    ///
    /// Extra entries beyond the nine known kinds are ignored.
    pub fn from_columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (usize, String)>,
    {
        let substances = columns
            .into_iter()
            .zip(SubstanceKind::ALL)
            .map(|((base_column, name), kind)| Substance {
                kind,
                name,
                base_column,
            })
            .collect();
        Self { substances }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Substance> {
        self.substances.iter()
    }

    pub fn len(&self) -> usize {
        self.substances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substances.is_empty()
    }

    pub fn get(&self, kind: SubstanceKind) -> Option<&Substance> {
        self.substances.iter().find(|substance| substance.kind == kind)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.substances.iter().map(|substance| substance.name.as_str())
    }
}

impl<'a> IntoIterator for &'a SubstanceCatalog {
    type Item = &'a Substance;
    type IntoIter = std::slice::Iter<'a, Substance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
