//! Listing definitions: per-registry schemas and the typed records they yield.
//!
//! A listing is one paginated registry dataset. Everything the engine needs to
//! operate a listing lives in its [`ListingSchema`]: the selectors for the
//! filter form and results table, the column index used for deduplication, and
//! the pure mapping from extracted cell texts to a typed record.

pub mod records;
pub mod schema;

pub use records::{EquipmentRecord, MedicationRecord, RowCells};
pub use schema::{
    ListingSchema, REGISTRATION_DATE_FILTER, SORT_ORDER_VALUE, equipment_schema,
    medications_schema,
};
