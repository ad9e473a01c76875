//! Error types for scrape operations.
//!
//! Every failure below the scheduler propagates with `?` — there are no
//! retries anywhere. A navigation or selector failure is fatal to the current
//! listing crawl; only the scheduler catches errors, once per tick.

use std::time::Duration;
use thiserror::Error;

/// Custom error type for scrape operations
#[derive(Debug, Clone, Error)]
pub enum ScrapeError {
    /// Browser launch or CDP-level failure
    #[error("browser error: {0}")]
    Browser(String),
    /// Page navigation or control interaction failed
    #[error("navigation error: {0}")]
    Navigation(String),
    /// A targeted element or option was absent from the page
    #[error("selector matched nothing: {selector}")]
    MissingElement { selector: String },
    /// The whole-crawl deadline elapsed
    #[error("crawl deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
    /// Crawl was cancelled via its cancellation token
    #[error("crawl cancelled")]
    Cancelled,
    /// Snapshot serialization or write failed
    #[error("persist error: {0}")]
    Persist(String),
}

/// Convenience alias for Result with `ScrapeError`
pub type ScrapeResult<T> = Result<T, ScrapeError>;
