//! The `ScrapeConfig` value type and its getters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the periodic scrape-and-persist job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Where the snapshot JSON is written, overwritten each tick.
    pub(crate) output_path: PathBuf,

    /// Period between scheduler ticks.
    pub(crate) interval: Duration,

    /// Whether the browser runs headless.
    pub(crate) headless: bool,

    /// Whole-crawl deadline for one listing.
    ///
    /// The site can stall indefinitely; this makes the "very long" bound an
    /// explicit choice instead of a structurally unbounded wait.
    pub(crate) crawl_deadline: Duration,

    /// Per-wait bound on individual page navigations.
    pub(crate) navigation_timeout: Duration,
}

impl ScrapeConfig {
    pub fn builder() -> super::ScrapeConfigBuilder {
        super::ScrapeConfigBuilder::default()
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn headless(&self) -> bool {
        self.headless
    }

    pub fn crawl_deadline(&self) -> Duration {
        self.crawl_deadline
    }

    pub fn navigation_timeout(&self) -> Duration {
        self.navigation_timeout
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
