//! Chainable builder for [`ScrapeConfig`].

use std::path::PathBuf;
use std::time::Duration;

use super::ScrapeConfig;

/// Snapshot interval matching the upstream registry's update cadence.
const DEFAULT_INTERVAL: Duration = Duration::from_secs(20 * 60);

/// Whole-crawl deadline. Generous on purpose: a full listing crawl over a
/// slow connection can take hours.
const DEFAULT_CRAWL_DEADLINE: Duration = Duration::from_secs(10_000);

const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(3_600);

/// Builder with defaults for every field.
#[derive(Debug, Clone)]
pub struct ScrapeConfigBuilder {
    output_path: PathBuf,
    interval: Duration,
    headless: bool,
    crawl_deadline: Duration,
    navigation_timeout: Duration,
}

impl Default for ScrapeConfigBuilder {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("result.json"),
            interval: DEFAULT_INTERVAL,
            headless: true,
            crawl_deadline: DEFAULT_CRAWL_DEADLINE,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
        }
    }
}

impl ScrapeConfigBuilder {
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn crawl_deadline(mut self, deadline: Duration) -> Self {
        self.crawl_deadline = deadline;
        self
    }

    pub fn navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    pub fn build(self) -> ScrapeConfig {
        ScrapeConfig {
            output_path: self.output_path,
            interval: self.interval,
            headless: self.headless,
            crawl_deadline: self.crawl_deadline,
            navigation_timeout: self.navigation_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_job() {
        let config = ScrapeConfig::default();
        assert_eq!(config.output_path().to_str(), Some("result.json"));
        assert_eq!(config.interval(), Duration::from_secs(1200));
        assert!(config.headless());
    }

    #[test]
    fn builder_overrides_stick() {
        let config = ScrapeConfig::builder()
            .output_path("/tmp/out.json")
            .interval(Duration::from_secs(5))
            .headless(false)
            .crawl_deadline(Duration::from_secs(30))
            .build();
        assert_eq!(config.output_path().to_str(), Some("/tmp/out.json"));
        assert_eq!(config.interval(), Duration::from_secs(5));
        assert!(!config.headless());
        assert_eq!(config.crawl_deadline(), Duration::from_secs(30));
    }
}
