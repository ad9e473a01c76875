//! Snapshot Scheduler: run-and-replace on a fixed period.
//!
//! Runs an extraction session immediately at startup, then once per
//! configured interval, persisting the aggregate result each time. A failed
//! tick is logged and skipped — one bad tick must not kill the long-running
//! process. No jitter, no overlap guard: a session that outruns the period
//! simply delays the next tick.

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::save_snapshot;
use crate::config::ScrapeConfig;
use crate::scrape_engine::{LogProgress, run_session};

/// Run the scrape-and-persist cycle indefinitely.
pub async fn run_scheduler(config: ScrapeConfig) -> anyhow::Result<()> {
    let mut interval = tokio::time::interval(config.interval());
    // The first tick fires immediately; later ones are period-spaced.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        "Scheduler started: snapshot every {:?} to {}",
        config.interval(),
        config.output_path().display()
    );

    loop {
        interval.tick().await;
        run_tick(&config).await;
    }
}

/// One tick: full session plus persistence. Never propagates errors.
async fn run_tick(config: &ScrapeConfig) {
    // Each tick gets a fresh token; nothing fires it today, but every
    // suspension point below already honors it.
    let cancel = CancellationToken::new();

    let snapshot = match run_session(config, &LogProgress, &cancel).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Scrape tick failed, skipping snapshot write: {e}");
            return;
        }
    };

    match save_snapshot(&snapshot, config.output_path()).await {
        Ok(()) => info!(
            "Snapshot written to {}: {} medical equipment, {} medication records",
            config.output_path().display(),
            snapshot.medical_equipment.len(),
            snapshot.medications.len()
        ),
        Err(e) => error!("Failed to persist snapshot: {e}"),
    }
}
