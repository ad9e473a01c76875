// Registry snapshot job: scrapes both rceth.by listings and rewrites
// result.json on a fixed interval. No CLI flags; only external effects are
// the output file and log lines on stdout.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use registry_snapshot::{ScrapeConfig, run_scheduler};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ScrapeConfig::default();
    run_scheduler(config).await
}
