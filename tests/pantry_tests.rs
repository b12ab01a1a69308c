//! Integration tests for pantry snapshots and the batch operations.
//!
//! Uses tempfile for testing file-based operations.

use grocery_manager::{
    GroceryItem, ItemUpdateBatch, LegacyItem, MANUAL_UPC, ManualBatch, Pantry, PantryError,
    ProductCatalog, ScannedBatch,
};
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn create_catalog_json(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("catalog.json");
    let content = r#"[
        {"UPC": 68700115004, "ItemName": "Crackers"},
        {"UPC": 123456789, "ItemName": "Eggs"}
    ]"#;
    std::fs::write(&path, content).unwrap();
    path
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// RECORD TESTS
// =============================================================================

#[test]
fn test_first_version_record_examples() {
    let item = LegacyItem::new("Milk", "2024-01-01", 2, 101);
    assert_eq!(item.name(), "Milk");
    assert_eq!(item.expiry(), "2024-01-01");
    assert_eq!(item.quantity(), 2);
    assert_eq!(item.item_id(), 101);
}

#[test]
fn test_second_version_record_examples() {
    let mut item = GroceryItem::new("Eggs", "2024-02-15", 12, 202, 123456789);
    assert_eq!(item.upc(), 123456789);

    item.set_quantity(6);
    assert_eq!(item.quantity(), 6);
    assert_eq!(item.name(), "Eggs");
    assert_eq!(item.expiry(), "2024-02-15");
    assert_eq!(item.item_id(), 202);
    assert_eq!(item.upc(), 123456789);
}

// =============================================================================
// PANTRY FLOW TESTS
// =============================================================================

#[test]
fn test_scan_update_delete_flow() {
    let dir = create_temp_dir();
    let catalog = ProductCatalog::from_file(create_catalog_json(&dir)).unwrap();
    let mut pantry = Pantry::new();

    let ids = pantry
        .add_scanned(
            38,
            ScannedBatch {
                upcs: vec![68700115004, 68700115004],
                expiries: strings(&["2023-12-31", "2024-01-15"]),
                counts: vec![2, 5],
            },
            &catalog,
        )
        .unwrap();
    assert_eq!(ids, vec![1, 2]);
    assert!(pantry.items(38).unwrap().iter().all(|i| i.name() == "Crackers"));

    let updated = pantry
        .update(
            38,
            ItemUpdateBatch {
                item_ids: ids.clone(),
                upcs: vec![123456, 789012],
                expiries: strings(&["2023-12-01", "2023-12-15"]),
                counts: vec![5, 10],
            },
        )
        .unwrap();
    assert_eq!(updated, 2);
    let counts: Vec<i32> = pantry.items(38).unwrap().iter().map(|i| i.quantity()).collect();
    assert_eq!(counts, vec![5, 10]);

    assert_eq!(pantry.delete(38, &ids), 2);
    assert!(pantry.items(38).unwrap().is_empty());
    assert_eq!(pantry.delete(38, &ids), 0);
}

#[test]
fn test_manual_add_rejects_uneven_columns() {
    let mut pantry = Pantry::new();
    let err = pantry
        .add_manual(
            38,
            ManualBatch {
                names: strings(&["Item1", "Item2"]),
                expiries: strings(&["2023-12-31"]),
                counts: vec![2, 5],
            },
        )
        .unwrap_err();

    assert!(matches!(err, PantryError::LengthMismatch { .. }));
    assert!(matches!(pantry.items(38), Err(PantryError::UnknownUser(38))));
}

// =============================================================================
// SNAPSHOT TESTS
// =============================================================================

#[test]
fn test_snapshot_survives_save_and_load() {
    let dir = create_temp_dir();
    let path = dir.path().join("nested").join("pantry.json");

    let mut pantry = Pantry::new();
    pantry
        .add_manual(
            1,
            ManualBatch {
                names: strings(&["Bread"]),
                expiries: strings(&["2024-03-01"]),
                counts: vec![1],
            },
        )
        .unwrap();
    pantry.save(&path).unwrap();
    assert!(!path.with_file_name("pantry.json.tmp").exists());

    let mut reloaded = Pantry::load(&path).unwrap();
    assert_eq!(
        reloaded.items(1).unwrap(),
        &[GroceryItem::new("Bread", "2024-03-01", 1, 1, MANUAL_UPC)]
    );

    // Counter carries over, so new ids keep counting up.
    let ids = reloaded
        .add_manual(
            2,
            ManualBatch {
                names: strings(&["Jam"]),
                expiries: strings(&["2025-01-01"]),
                counts: vec![1],
            },
        )
        .unwrap();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_missing_snapshot_is_empty_pantry() {
    let dir = create_temp_dir();
    let pantry = Pantry::load(dir.path().join("absent.json")).unwrap();
    assert!(pantry.is_empty());
    assert_eq!(pantry.users().count(), 0);
}

#[test]
fn test_corrupt_snapshot_is_json_error() {
    let dir = create_temp_dir();
    let path = dir.path().join("pantry.json");
    std::fs::write(&path, "[1, 2").unwrap();

    assert!(matches!(Pantry::load(&path), Err(PantryError::Json(_))));
}

#[test]
fn test_bundled_snapshot_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join("pantry.json");
    let pantry = Pantry::load(path).unwrap();

    assert_eq!(pantry.users().collect::<Vec<_>>(), vec![1, 2]);
    assert!(pantry.items(1).unwrap()[0].is_manual());
    assert_eq!(pantry.items(2).unwrap()[0].upc(), 123456789);
}
