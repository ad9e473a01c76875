//! Chromiumoxide-backed implementation of [`ListingPage`].
//!
//! Element lookups go through CDP (`find_element`/`find_elements`); the
//! `<select>` interactions run as injected JavaScript because CDP has no
//! native select-option command — the script sets the value and dispatches
//! the `input`/`change` events a manual selection would, which is what makes
//! the registry's pagination control navigate.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Element, Page};
use tracing::debug;

use super::ListingPage;
use crate::scrape_engine::{ScrapeError, ScrapeResult};

/// One registry page driven over CDP.
///
/// Owns no browser state beyond the `Page` handle; the session is
/// responsible for launching and closing the browser around it.
pub struct BrowserListingPage {
    page: Page,
    navigation_timeout: Duration,
}

impl BrowserListingPage {
    pub fn new(page: Page, navigation_timeout: Duration) -> Self {
        Self {
            page,
            navigation_timeout,
        }
    }

    /// Wait for the in-flight navigation, bounded by the configured timeout.
    async fn wait_for_navigation(&self) -> ScrapeResult<()> {
        with_timeout(
            self.navigation_timeout,
            "navigation wait",
            self.page.wait_for_navigation(),
        )
        .await?;
        Ok(())
    }

    async fn find(&self, selector: &str) -> ScrapeResult<Element> {
        self.page
            .find_element(selector)
            .await
            .map_err(|_| ScrapeError::MissingElement {
                selector: selector.to_string(),
            })
    }
}

#[async_trait]
impl ListingPage for BrowserListingPage {
    async fn open(&self, url: &str) -> ScrapeResult<()> {
        debug!("Opening {url}");
        self.page
            .goto(url)
            .await
            .map_err(|e| ScrapeError::Navigation(format!("goto {url}: {e}")))?;
        self.wait_for_navigation().await
    }

    async fn type_text(&self, selector: &str, text: &str) -> ScrapeResult<()> {
        let element = self.find(selector).await?;
        element
            .click()
            .await
            .map_err(|e| ScrapeError::Navigation(format!("focus {selector}: {e}")))?
            .type_str(text)
            .await
            .map_err(|e| ScrapeError::Navigation(format!("type into {selector}: {e}")))?;
        Ok(())
    }

    async fn select_value(&self, selector: &str, value: &str) -> ScrapeResult<()> {
        let script = format!(
            r#"(() => {{
                const select = document.querySelector({selector:?});
                if (!select) return false;
                select.value = {value:?};
                select.dispatchEvent(new Event('input', {{ bubbles: true }}));
                select.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#
        );
        let found: bool = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| ScrapeError::Navigation(format!("select on {selector}: {e}")))?
            .into_value()
            .map_err(|e| ScrapeError::Navigation(format!("select result on {selector}: {e}")))?;
        if !found {
            return Err(ScrapeError::MissingElement {
                selector: selector.to_string(),
            });
        }
        Ok(())
    }

    async fn submit_and_wait(&self, selector: &str) -> ScrapeResult<()> {
        let element = self.find(selector).await?;
        element
            .click()
            .await
            .map_err(|e| ScrapeError::Navigation(format!("click {selector}: {e}")))?;
        self.wait_for_navigation().await
    }

    async fn select_page_and_wait(&self, selector: &str, value: &str) -> ScrapeResult<()> {
        self.select_value(selector, value).await?;
        self.wait_for_navigation().await
    }

    async fn option_values(&self, selector: &str) -> ScrapeResult<Vec<String>> {
        let script = format!(
            r#"(() => {{
                const select = document.querySelector({selector:?});
                if (!select) return null;
                return Array.from(select.options).map(option => option.value);
            }})()"#
        );
        let values: Option<Vec<String>> = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| ScrapeError::Navigation(format!("read options of {selector}: {e}")))?
            .into_value()
            .map_err(|e| ScrapeError::Navigation(format!("option values of {selector}: {e}")))?;
        values.ok_or_else(|| ScrapeError::MissingElement {
            selector: selector.to_string(),
        })
    }

    async fn row_markup(&self, selector: &str) -> ScrapeResult<Vec<String>> {
        // Zero matches is Ok(vec![]) — a degenerate but valid page. An Err
        // here is a genuine CDP/transport failure and must abort the crawl
        // rather than pass off an empty page as complete.
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| ScrapeError::Navigation(format!("query rows {selector}: {e}")))?;
        debug!("Found {} rows for {selector}", elements.len());

        // Every row read completes before this method returns; the page must
        // not navigate away while markup is still being pulled.
        let mut rows = Vec::with_capacity(elements.len());
        for element in &elements {
            let html = element
                .inner_html()
                .await
                .map_err(|e| ScrapeError::Navigation(format!("read row markup: {e}")))?
                .unwrap_or_default();
            rows.push(html);
        }
        Ok(rows)
    }
}

/// Bound an async page operation with an explicit timeout.
async fn with_timeout<F, T, E>(timeout: Duration, operation: &str, fut: F) -> ScrapeResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(ScrapeError::Navigation(format!("{operation}: {e}"))),
        Err(_) => Err(ScrapeError::Navigation(format!(
            "{operation} timed out after {timeout:?}"
        ))),
    }
}
