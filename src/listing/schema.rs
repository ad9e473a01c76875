//! The per-listing schema value and the two concrete registry schemas.
//!
//! Selectors are the sole contract with the remote markup, so they are kept
//! together in one immutable value per listing instead of scattered literals.
//! Adding another registry listing means one more constructor here plus a
//! record type and mapper in `records` — the engine stays untouched.

use super::records::{EquipmentRecord, MedicationRecord, RowCells};

/// Registration-date value typed into the filter form before submission.
/// Early enough to cover the full registry.
pub const REGISTRATION_DATE_FILTER: &str = "01.01.1999";

/// Sort-order option selected on the date criterion (`>=` on the site).
pub const SORT_ORDER_VALUE: &str = "Great";

/// Everything needed to drive one listing: form/table selectors, the dedup
/// column, and the row-to-record mapping.
///
/// Instances are immutable and defined once per listing type.
#[derive(Debug, Clone)]
pub struct ListingSchema<R> {
    /// Human-readable listing name, used in logs and progress lines.
    pub name: &'static str,
    /// Results URL of the listing's filter form.
    pub url: &'static str,
    /// Filter form submit button.
    pub submit_selector: &'static str,
    /// Registration-date criterion input.
    pub date_field_selector: &'static str,
    /// Sort-order criterion select.
    pub sort_field_selector: &'static str,
    /// One results-table row.
    pub row_selector: &'static str,
    /// Pagination select control.
    pub page_select_selector: &'static str,
    /// Cell index whose text uniquely identifies a record within the listing.
    pub unique_field_index: usize,
    /// Pure positional mapping from cell texts to a typed record.
    pub map_row: fn(&RowCells) -> R,
}

/// Schema for the medical equipment registry.
///
/// Cell 0 is the row number; cell 5 (register number) is the unique key.
pub fn equipment_schema() -> ListingSchema<EquipmentRecord> {
    ListingSchema {
        name: "medical equipment",
        url: "https://www.rceth.by/Refbank/reestr_medicinskoy_tehniki/results",
        submit_selector: "input[type='submit']",
        date_field_selector: "#FProps_5__CritElemsD_Val1",
        sort_field_selector: "#FProps_5__CritElemsD_Crit",
        row_selector: ".results table tbody tr",
        page_select_selector: "select#FOpt_PageN",
        unique_field_index: 5,
        map_row: map_equipment_row,
    }
}

/// Schema for the medications registry.
///
/// Cell 1 (trading name) is the unique key.
pub fn medications_schema() -> ListingSchema<MedicationRecord> {
    ListingSchema {
        name: "medications",
        url: "https://www.rceth.by/Refbank/reestr_lekarstvennih_sredstv/",
        submit_selector: "input[type='submit']",
        date_field_selector: "input#FProps_7__CritElemsD_Val1",
        sort_field_selector: "select#FProps_7__CritElemsD_Crit",
        row_selector: ".results table tbody tr",
        page_select_selector: "select#FOpt_PageN",
        unique_field_index: 1,
        map_row: map_medication_row,
    }
}

fn map_equipment_row(row: &RowCells) -> EquipmentRecord {
    EquipmentRecord {
        name: row.field(1).to_string(),
        manufacturer: row.field(2).to_string(),
        declarant: row.field(3).to_string(),
        id_number: row.field(4).to_string(),
        register_number: row.field(5).to_string(),
        registration_date: row.field(6).to_string(),
        validity: row.field(7).to_string(),
        kind: row.field(8).to_string(),
    }
}

fn map_medication_row(row: &RowCells) -> MedicationRecord {
    MedicationRecord {
        trading_name: row.field(1).to_string(),
        international_name: row.field(2).to_string(),
        manufacturer: row.field(3).to_string(),
        declarant: row.field(4).to_string(),
        id_number: row.field(5).to_string(),
        registration_date: row.field(6).to_string(),
        validity: row.field(7).to_string(),
        original: row.field(8).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RowCells {
        RowCells::new(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn equipment_mapper_uses_positional_cells() {
        let schema = equipment_schema();
        let cells = row(&["1", "n", "m", "d", "id", "reg", "date", "val", "t"]);
        let record = (schema.map_row)(&cells);
        assert_eq!(record.name, "n");
        assert_eq!(record.register_number, "reg");
        assert_eq!(record.kind, "t");
        // The unique key column is the register number.
        assert_eq!(cells.field(schema.unique_field_index), "reg");
    }

    #[test]
    fn mapper_is_total_over_short_rows() {
        let schema = medications_schema();
        let record = (schema.map_row)(&row(&["1", "aspirin"]));
        assert_eq!(record.trading_name, "aspirin");
        assert_eq!(record.international_name, "");
        assert_eq!(record.original, "");
    }

    #[test]
    fn mapper_is_pure() {
        let schema = medications_schema();
        let cells = row(&["1", "a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_eq!((schema.map_row)(&cells), (schema.map_row)(&cells));
    }
}
