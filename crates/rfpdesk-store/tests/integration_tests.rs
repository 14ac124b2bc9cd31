//! Integration tests for rfpdesk-store
//!
//! These tests verify the save/load cycle against real files.

use rfpdesk_domain::traits::DocumentPersistence;
use rfpdesk_domain::{DocumentRecord, DocumentStore};
use rfpdesk_store::{render_snapshot, JsonFileStore};
use std::fs;
use tempfile::TempDir;

fn sparse_record() -> DocumentRecord {
    DocumentRecord::new("Office Cleaning Services", "Globex Inc")
}

fn full_record() -> DocumentRecord {
    DocumentRecord::new("Data Center Migration", "Initech")
        .with_description("Move two racks to a colocation facility")
        .with_requirements("ISO 27001; weekend cutover")
        .with_contact("procurement@initech.example")
        .with_deadline("2025-03-31")
        .with_budget("$250,000")
}

fn stored(records: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
    let mut store = DocumentStore::new();
    for record in records {
        store.append(record).unwrap();
    }
    store.into_records()
}

#[test]
fn test_round_trip_all_fields_absent() {
    let dir = TempDir::new().unwrap();
    let persistence = JsonFileStore::new(dir.path().join("docs.json"));

    let records = stored(vec![sparse_record()]);
    persistence.save(&records).unwrap();

    assert_eq!(persistence.load().unwrap(), records);
}

#[test]
fn test_round_trip_all_fields_present() {
    let dir = TempDir::new().unwrap();
    let persistence = JsonFileStore::new(dir.path().join("docs.json"));

    let records = stored(vec![full_record(), sparse_record(), full_record()]);
    persistence.save(&records).unwrap();

    let loaded = persistence.load().unwrap();
    assert_eq!(loaded, records);
    let ids: Vec<u64> = loaded.iter().map(|r| r.id().unwrap().value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_round_trip_empty_list() {
    let dir = TempDir::new().unwrap();
    let persistence = JsonFileStore::new(dir.path().join("docs.json"));

    persistence.save(&[]).unwrap();
    assert!(persistence.load().unwrap().is_empty());
}

#[test]
fn test_saved_file_uses_explicit_nulls() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    let persistence = JsonFileStore::new(&path);

    persistence.save(&stored(vec![sparse_record()])).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"description\": null"));
    assert!(text.contains("\"budget\": null"));
    // Pretty-printed, one key per line
    assert!(text.lines().count() > 8);
}

#[test]
fn test_corrupt_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(&path, "[{\"id\": 1, \"title\": ").unwrap();

    let persistence = JsonFileStore::new(&path);
    assert!(persistence.load().unwrap().is_empty());
}

#[test]
fn test_wrong_shape_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(&path, r#"{"documents": []}"#).unwrap();

    let persistence = JsonFileStore::new(&path);
    assert!(persistence.load().unwrap().is_empty());
}

#[test]
fn test_invalid_utf8_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    let persistence = JsonFileStore::new(&path);
    assert!(persistence.load().unwrap().is_empty());
}

#[test]
fn test_reload_continues_numbering() {
    let dir = TempDir::new().unwrap();
    let persistence = JsonFileStore::new(dir.path().join("docs.json"));
    persistence.save(&stored(vec![sparse_record(), sparse_record()])).unwrap();

    let mut store = DocumentStore::from_records(persistence.load().unwrap());
    let id = store.append(full_record()).unwrap().id().unwrap();
    assert_eq!(id.value(), 3);
}

#[test]
fn test_clear_then_load_is_empty() {
    let dir = TempDir::new().unwrap();
    let persistence = JsonFileStore::new(dir.path().join("docs.json"));
    persistence.save(&stored(vec![full_record()])).unwrap();

    persistence.clear().unwrap();
    assert!(persistence.load().unwrap().is_empty());
}

#[test]
fn test_snapshot_matches_file_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    let persistence = JsonFileStore::new(&path);

    let records = stored(vec![full_record(), sparse_record()]);
    persistence.save(&records).unwrap();

    assert_eq!(render_snapshot(&records).unwrap(), fs::read_to_string(&path).unwrap());
}
