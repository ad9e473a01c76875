//! Configuration for the snapshot scraper.
//!
//! The process takes no CLI flags and no environment variables; this config
//! exists so the defaults are explicit values rather than scattered literals,
//! and so tests can shrink the timeouts.

mod builder;
mod types;

pub use builder::ScrapeConfigBuilder;
pub use types::ScrapeConfig;
