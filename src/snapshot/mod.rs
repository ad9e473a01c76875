//! Snapshot Module
//!
//! The aggregate result of one extraction session and its JSON persistence.
//! Every scheduler tick rebuilds the snapshot from scratch and overwrites
//! the output file wholesale — there is no merge with prior content.

pub mod scheduler;

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::listing::{EquipmentRecord, MedicationRecord};
use crate::scrape_engine::{RecordSet, ScrapeError, ScrapeResult};

pub use scheduler::run_scheduler;

/// Combined result of one session: both listings, in disjoint collections.
///
/// Keys from the two listings can never collide because each listing keeps
/// its own map. Serializes to
/// `{ "medicalEquipment": {...}, "medications": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub medical_equipment: RecordSet<EquipmentRecord>,
    pub medications: RecordSet<MedicationRecord>,
}

impl Snapshot {
    /// Total records across both listings, for log lines.
    pub fn record_count(&self) -> usize {
        self.medical_equipment.len() + self.medications.len()
    }
}

/// Serialize the snapshot and overwrite `path` with it.
pub async fn save_snapshot(snapshot: &Snapshot, path: &Path) -> ScrapeResult<()> {
    write_snapshot(snapshot, path)
        .await
        .map_err(|e| ScrapeError::Persist(format!("{e:#}")))
}

async fn write_snapshot(snapshot: &Snapshot, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_vec(snapshot).context("Failed to serialize snapshot")?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
