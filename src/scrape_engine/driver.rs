//! Pagination Driver: drives one listing crawl from form submission to the
//! last page.
//!
//! State machine: Idle → FormSubmitted → EnumeratingPages → VisitingPage(i) →
//! Done. The crawl plan is the pagination control's option list, read exactly
//! once after form submission and visited strictly in its original order.
//! There is no retry anywhere: any navigation, selection, or read failure
//! aborts the listing crawl.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::collector::RecordSet;
use super::errors::{ScrapeError, ScrapeResult};
use super::progress::ProgressReporter;
use super::row_extractor::extract_cells;
use crate::listing::{ListingSchema, REGISTRATION_DATE_FILTER, SORT_ORDER_VALUE};
use crate::page_driver::ListingPage;

/// Crawl one listing to completion and return its deduplicated records.
///
/// The whole crawl runs under `deadline` and checks `cancel` at each page
/// boundary; both default to effectively-unbounded in the shipped config but
/// are explicit rather than structural.
pub async fn scrape_listing<P, R>(
    page: &P,
    schema: &ListingSchema<R>,
    progress: &dyn ProgressReporter,
    cancel: &CancellationToken,
    deadline: Duration,
) -> ScrapeResult<RecordSet<R>>
where
    P: ListingPage + ?Sized,
    R: Send,
{
    match tokio::time::timeout(deadline, crawl(page, schema, progress, cancel)).await {
        Ok(result) => result,
        Err(_) => Err(ScrapeError::DeadlineExceeded(deadline)),
    }
}

async fn crawl<P, R>(
    page: &P,
    schema: &ListingSchema<R>,
    progress: &dyn ProgressReporter,
    cancel: &CancellationToken,
) -> ScrapeResult<RecordSet<R>>
where
    P: ListingPage + ?Sized,
    R: Send,
{
    if cancel.is_cancelled() {
        return Err(ScrapeError::Cancelled);
    }

    progress.listing_started(schema.name);

    // Idle → FormSubmitted: fill the filter form and submit it. Submission
    // and the navigation wait form one step — the resulting navigation is
    // the only completion signal the site gives.
    page.open(schema.url).await?;
    page.type_text(schema.date_field_selector, REGISTRATION_DATE_FILTER)
        .await?;
    page.select_value(schema.sort_field_selector, SORT_ORDER_VALUE)
        .await?;
    page.submit_and_wait(schema.submit_selector).await?;

    // FormSubmitted → EnumeratingPages: the option list is captured once and
    // never re-read, so it reflects the result set as of form submission.
    let options = page.option_values(schema.page_select_selector).await?;
    let plan = plan_pages(&options);
    let total = plan.len();
    info!("{}: {total} pages to visit", schema.name);

    let mut records = RecordSet::new();

    // EnumeratingPages → VisitingPage(i), in plan order.
    for page_value in &plan {
        if cancel.is_cancelled() {
            return Err(ScrapeError::Cancelled);
        }

        page.select_page_and_wait(schema.page_select_selector, page_value)
            .await?;

        let rows = page.row_markup(schema.row_selector).await?;
        debug!("{}: page {page_value}, {} rows", schema.name, rows.len());
        for row_html in &rows {
            let cells = extract_cells(row_html);
            records.insert_row(&cells, schema);
        }

        progress.page_scraped(page_value, total);
    }

    progress.listing_finished(schema.name, records.len());
    Ok(records)
}

/// Filter the pagination control's option values down to the crawl plan.
///
/// Keeps values that parse as a positive number, preserving the control's
/// order; drops blank and "All"-style sentinel options.
pub fn plan_pages(options: &[String]) -> Vec<String> {
    options
        .iter()
        .filter(|value| {
            value
                .trim()
                .parse::<u32>()
                .is_ok_and(|page_number| page_number > 0)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn plan_drops_blank_and_sentinel_options() {
        let plan = plan_pages(&options(&["", "1", "2", "All"]));
        assert_eq!(plan, options(&["1", "2"]));
    }

    #[test]
    fn plan_preserves_source_order() {
        // Whatever order the site presents, not numeric order.
        let plan = plan_pages(&options(&["3", "1", "2"]));
        assert_eq!(plan, options(&["3", "1", "2"]));
    }

    #[test]
    fn plan_drops_zero_and_non_numeric_values() {
        let plan = plan_pages(&options(&["0", "-1", "x", "10"]));
        assert_eq!(plan, options(&["10"]));
    }
}
