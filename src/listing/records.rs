//! Row cell texts and the typed records mapped from them.

use serde::{Deserialize, Serialize};

/// Ordered, trimmed cell texts of one table row, in document order.
///
/// Transient: produced by the row extractor and consumed by a record mapper
/// within a single page visit. Has no identity beyond cell position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowCells(Vec<String>);

impl RowCells {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Cell text at `index`, or `""` when the row is shorter than `index + 1`.
    ///
    /// Well-formed pages never produce short rows, but a malformed one must
    /// yield a record with empty fields rather than abort the crawl.
    pub fn field(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for RowCells {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

/// One entry of the medical equipment registry.
///
/// Field names serialize to the snapshot's wire names (`idNumber`,
/// `registerNumber`, ...); cell text passes through verbatim, empty strings
/// included — no field-level validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRecord {
    pub name: String,
    pub manufacturer: String,
    pub declarant: String,
    pub id_number: String,
    pub register_number: String,
    pub registration_date: String,
    pub validity: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One entry of the medications registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    pub trading_name: String,
    pub international_name: String,
    pub manufacturer: String,
    pub declarant: String,
    pub id_number: String,
    pub registration_date: String,
    pub validity: String,
    pub original: String,
}
