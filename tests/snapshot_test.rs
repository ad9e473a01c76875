//! Snapshot aggregation, JSON shape, and wholesale-replace persistence.

use registry_snapshot::{
    RecordSet, RowCells, ScrapeError, Snapshot, equipment_schema, medications_schema,
    save_snapshot,
};
use tempfile::TempDir;

fn row(cells: &[&str]) -> RowCells {
    RowCells::new(cells.iter().map(|c| c.to_string()).collect())
}

fn sample_snapshot() -> Snapshot {
    let equipment = equipment_schema();
    let medications = medications_schema();

    let mut medical_equipment = RecordSet::new();
    medical_equipment.insert_row(
        &row(&["1", "scanner", "m", "d", "id-1", "EQ-1", "2020", "2030", "device"]),
        &equipment,
    );

    let mut medication_set = RecordSet::new();
    medication_set.insert_row(
        &row(&["1", "aspirin", "asa", "m", "d", "id-2", "2020", "2030", "yes"]),
        &medications,
    );

    Snapshot {
        medical_equipment,
        medications: medication_set,
    }
}

#[test]
fn snapshot_serializes_with_wire_field_names() {
    let snapshot = sample_snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    let equipment = &json["medicalEquipment"]["EQ-1"];
    assert_eq!(equipment["name"], "scanner");
    assert_eq!(equipment["registerNumber"], "EQ-1");
    assert_eq!(equipment["type"], "device");

    let medication = &json["medications"]["aspirin"];
    assert_eq!(medication["tradingName"], "aspirin");
    assert_eq!(medication["internationalName"], "asa");
    assert_eq!(medication["original"], "yes");
}

#[test]
fn listings_live_in_disjoint_collections() {
    let equipment = equipment_schema();
    let medications = medications_schema();

    // The same key text in both listings stays two separate records.
    let mut medical_equipment = RecordSet::new();
    medical_equipment.insert_row(
        &row(&["1", "equip", "", "", "", "SHARED", "", "", ""]),
        &equipment,
    );
    let mut medication_set = RecordSet::new();
    medication_set.insert_row(
        &row(&["1", "SHARED", "", "", "", "", "", "", ""]),
        &medications,
    );

    let snapshot = Snapshot {
        medical_equipment,
        medications: medication_set,
    };
    assert_eq!(snapshot.record_count(), 2);
    assert!(snapshot.medical_equipment.get("SHARED").is_some());
    assert!(snapshot.medications.get("SHARED").is_some());
}

#[tokio::test]
async fn save_replaces_prior_content_wholesale() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.json");

    let first = sample_snapshot();
    save_snapshot(&first, &path).await.unwrap();

    // Second tick with disjoint data: no stale keys may survive.
    let equipment = equipment_schema();
    let mut medical_equipment = RecordSet::new();
    medical_equipment.insert_row(
        &row(&["1", "pump", "m", "d", "id-9", "EQ-9", "2021", "2031", "device"]),
        &equipment,
    );
    let second = Snapshot {
        medical_equipment,
        medications: RecordSet::new(),
    };
    save_snapshot(&second, &path).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(written["medicalEquipment"]["EQ-9"].is_object());
    assert!(written["medicalEquipment"]["EQ-1"].is_null());
    assert_eq!(
        written["medications"],
        serde_json::json!({}),
        "stale medication keys must not survive a tick"
    );
}

#[tokio::test]
async fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("out").join("result.json");

    save_snapshot(&sample_snapshot(), &path).await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn write_failure_surfaces_as_persist_error() {
    let dir = TempDir::new().unwrap();
    // A regular file where a directory is needed makes create_dir_all fail.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();
    let path = blocker.join("result.json");

    let err = save_snapshot(&sample_snapshot(), &path).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Persist(_)));
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = sample_snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}
