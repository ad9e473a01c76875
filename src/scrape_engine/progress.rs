//! Progress reporting abstraction for listing crawls
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting, a
//! logging implementation for the long-running job, and a no-op
//! implementation for tests.

use tracing::info;

/// Trait for reporting crawl progress at key lifecycle events
///
/// Implementations can log to console, update UI, send to channels, etc.
/// This abstraction keeps the pagination driver independent of how progress
/// is surfaced.
pub trait ProgressReporter: Send + Sync {
    /// Report that a listing crawl has started
    fn listing_started(&self, listing: &str);

    /// Report that one page of the listing has been scraped
    fn page_scraped(&self, page: &str, total_pages: usize);

    /// Report that a listing crawl finished with the given record count
    fn listing_finished(&self, listing: &str, records: usize);
}

/// Progress reporter that writes tracing log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn listing_started(&self, listing: &str) {
        info!("Starting parsing {listing}");
    }

    fn page_scraped(&self, page: &str, total_pages: usize) {
        info!("Parsed {page} of {total_pages}");
    }

    fn listing_finished(&self, listing: &str, records: usize) {
        info!("Finished parsing {listing}: {records} records");
    }
}

/// Progress reporter that does nothing
///
/// All methods are no-ops and will be inlined away by the compiler.
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn listing_started(&self, _listing: &str) {}

    #[inline(always)]
    fn page_scraped(&self, _page: &str, _total_pages: usize) {}

    #[inline(always)]
    fn listing_finished(&self, _listing: &str, _records: usize) {}
}
