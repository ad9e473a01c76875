//! Page Driver Module
//!
//! The seam between the scrape engine and the browser: [`ListingPage`]
//! abstracts the handful of page operations the pagination driver needs, and
//! [`BrowserListingPage`] implements them over a chromiumoxide CDP page.
//! Tests drive the engine through this trait with an in-memory fake.

pub mod browser;

use async_trait::async_trait;

use crate::scrape_engine::ScrapeResult;

pub use browser::BrowserListingPage;

/// Browser operations required to drive one listing crawl.
///
/// Every method is an explicit suspension point: it resolves only once the
/// browser has completed the interaction (and, for the `_and_wait` variants,
/// the navigation it triggers). There is no polling in the engine itself.
#[async_trait]
pub trait ListingPage: Send + Sync {
    /// Navigate to `url` and wait for the page to load.
    async fn open(&self, url: &str) -> ScrapeResult<()>;

    /// Type `text` into the element matching `selector`.
    async fn type_text(&self, selector: &str, text: &str) -> ScrapeResult<()>;

    /// Set the value of the `<select>` matching `selector`, dispatching the
    /// events a manual selection would.
    async fn select_value(&self, selector: &str, value: &str) -> ScrapeResult<()>;

    /// Click the element matching `selector` and wait for the navigation it
    /// triggers. Navigation completion is the only "form accepted" signal
    /// the site provides.
    async fn submit_and_wait(&self, selector: &str) -> ScrapeResult<()>;

    /// Select `value` in the pagination control and wait for the resulting
    /// navigation.
    async fn select_page_and_wait(&self, selector: &str, value: &str) -> ScrapeResult<()>;

    /// All option values of the `<select>` matching `selector`, in document
    /// order.
    async fn option_values(&self, selector: &str) -> ScrapeResult<Vec<String>>;

    /// Inner markup of every element matching `selector`, in document order.
    /// Zero matches yields an empty vec, not an error.
    async fn row_markup(&self, selector: &str) -> ScrapeResult<Vec<String>>;
}
