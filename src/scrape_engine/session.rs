//! Extraction Session: one full two-listing run.
//!
//! Runs the pagination driver once per configured listing, strictly in
//! sequence — each crawl launches and owns the sole browsing context, which
//! is released before the next listing starts. Either crawl failing fails
//! the whole session; no partial snapshot is produced.

use std::path::PathBuf;

use chromiumoxide::Browser;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::collector::RecordSet;
use super::driver::scrape_listing;
use super::errors::{ScrapeError, ScrapeResult};
use super::progress::ProgressReporter;
use crate::browser_setup::launch_browser;
use crate::config::ScrapeConfig;
use crate::listing::{ListingSchema, equipment_schema, medications_schema};
use crate::page_driver::BrowserListingPage;
use crate::snapshot::Snapshot;

/// Run both listing crawls and combine them into one snapshot.
pub async fn run_session(
    config: &ScrapeConfig,
    progress: &dyn ProgressReporter,
    cancel: &CancellationToken,
) -> ScrapeResult<Snapshot> {
    let medical_equipment =
        crawl_listing_in_browser(config, &equipment_schema(), progress, cancel).await?;
    let medications =
        crawl_listing_in_browser(config, &medications_schema(), progress, cancel).await?;

    Ok(Snapshot {
        medical_equipment,
        medications,
    })
}

/// Launch a fresh browser, crawl one listing in it, and release the browser
/// whether or not the crawl succeeded.
async fn crawl_listing_in_browser<R>(
    config: &ScrapeConfig,
    schema: &ListingSchema<R>,
    progress: &dyn ProgressReporter,
    cancel: &CancellationToken,
) -> ScrapeResult<RecordSet<R>>
where
    R: Send,
{
    let (browser, handler_task, user_data_dir) = launch_browser(config.headless())
        .await
        .map_err(|e| ScrapeError::Browser(format!("{e:#}")))?;

    let result = async {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::Browser(format!("new page: {e}")))?;
        let listing_page = BrowserListingPage::new(page, config.navigation_timeout());
        scrape_listing(
            &listing_page,
            schema,
            progress,
            cancel,
            config.crawl_deadline(),
        )
        .await
    }
    .await;

    shutdown_browser(browser, handler_task, user_data_dir).await;
    result
}

/// Close the browser, stop its CDP handler task, and drop the profile dir.
///
/// Best-effort: shutdown failures are logged, never propagated — the crawl
/// result matters more than cleanup hiccups.
async fn shutdown_browser(
    mut browser: Browser,
    handler_task: JoinHandle<()>,
    user_data_dir: PathBuf,
) {
    debug!("Closing browser");
    if let Err(e) = browser.close().await {
        warn!("Failed to close browser: {e}");
    }
    // Wait for the process to fully exit before removing its profile dir.
    if let Err(e) = browser.wait().await {
        warn!("Failed to wait for browser exit: {e}");
    }

    handler_task.abort();
    if let Err(e) = handler_task.await
        && !e.is_cancelled()
    {
        warn!("Browser handler task failed during abort: {e}");
    }

    if let Err(e) = std::fs::remove_dir_all(&user_data_dir) {
        warn!(
            "Failed to remove browser profile dir {}: {e}",
            user_data_dir.display()
        );
    }
}
