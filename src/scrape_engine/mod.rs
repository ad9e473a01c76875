//! Scrape Engine Module
//!
//! The paginated extraction-and-deduplication engine: drives a listing's
//! filter form and pagination control to completion, turns row markup into
//! typed records via the listing schema, and merges them idempotently into a
//! keyed collection. The extraction session runs the engine once per
//! configured listing and combines the results.

pub mod collector;
pub mod driver;
pub mod errors;
pub mod progress;
pub mod row_extractor;
pub mod session;

pub use collector::RecordSet;
pub use driver::scrape_listing;
pub use errors::{ScrapeError, ScrapeResult};
pub use progress::{LogProgress, NoOpProgress, ProgressReporter};
pub use row_extractor::extract_cells;
pub use session::run_session;
