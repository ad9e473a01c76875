pub mod browser_setup;
pub mod config;
pub mod listing;
pub mod page_driver;
pub mod scrape_engine;
pub mod snapshot;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::ScrapeConfig;
pub use listing::{
    EquipmentRecord, ListingSchema, MedicationRecord, RowCells, equipment_schema,
    medications_schema,
};
pub use page_driver::{BrowserListingPage, ListingPage};
pub use scrape_engine::{
    LogProgress, NoOpProgress, ProgressReporter, RecordSet, ScrapeError, ScrapeResult,
    extract_cells, run_session, scrape_listing,
};
pub use snapshot::{Snapshot, run_scheduler, save_snapshot};
