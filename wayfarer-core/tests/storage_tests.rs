// Tests for the snapshot storage backends

use tempfile::TempDir;
use wayfarer_core::catalog;
use wayfarer_core::storage::{FileStorage, MemoryStorage, SnapshotStorage, SqliteStorage};
use wayfarer_core::store::VisitedStore;

fn create_test_db() -> (TempDir, SqliteStorage) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = SqliteStorage::new(&db_path).unwrap();
    (temp_dir, storage)
}

// ============================================================================
// Memory Storage Tests
// ============================================================================

#[test]
fn test_memory_storage_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get().unwrap(), None);
}

#[test]
fn test_memory_storage_clones_share_slot() {
    let storage = MemoryStorage::new();
    let mut writer = storage.clone();
    writer.set("[]").unwrap();
    assert_eq!(storage.snapshot(), Some("[]".to_string()));
}

// ============================================================================
// File Storage Tests
// ============================================================================

#[test]
fn test_file_storage_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::new(temp_dir.path());
    assert_eq!(storage.get().unwrap(), None);
    assert!(storage.path().ends_with("visited_places_v1.json"));
}

#[test]
fn test_file_storage_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp_dir.path());

    storage.set("first").unwrap();
    storage.set("second").unwrap();

    assert_eq!(storage.get().unwrap(), Some("second".to_string()));
    assert!(!temp_dir.path().join("visited_places_v1.json.tmp").exists());
}

#[test]
fn test_file_storage_write_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(&temp_dir.path().join("missing-dir"));
    assert!(storage.set("[]").is_err());
}

#[test]
fn test_store_swallows_storage_write_failure() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileStorage::new(&temp_dir.path().join("missing-dir"));
    let mut store = VisitedStore::new(storage);
    store.load();

    let regions = store.toggle("US_STATE:ME").unwrap();
    assert!(regions.iter().any(|r| r.id == "US_STATE:ME" && r.visited));
}

// ============================================================================
// SQLite Storage Tests
// ============================================================================

#[test]
fn test_database_creation() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    assert!(!SqliteStorage::exists(&db_path));
    let storage = SqliteStorage::new(&db_path);
    assert!(storage.is_ok());
    assert!(SqliteStorage::exists(&db_path));
}

#[test]
fn test_sqlite_storage_round_trip() {
    let (_temp_dir, mut storage) = create_test_db();

    assert_eq!(storage.get().unwrap(), None);
    assert_eq!(storage.updated_at().unwrap(), None);

    storage.set("one").unwrap();
    storage.set("two").unwrap();

    assert_eq!(storage.get().unwrap(), Some("two".to_string()));
    assert!(storage.updated_at().unwrap().is_some());
}

#[test]
fn test_sqlite_storage_persists_across_connections() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    {
        let mut store = VisitedStore::new(SqliteStorage::new(&db_path).unwrap());
        store.load();
        store.toggle("COUNTRY:NL").unwrap();
    }

    let mut store = VisitedStore::new(SqliteStorage::new(&db_path).unwrap());
    let regions = store.load();
    assert_eq!(regions.len(), catalog::all_regions().len());
    assert!(regions.iter().any(|r| r.id == "COUNTRY:NL" && r.visited));
}

#[test]
fn test_sqlite_in_memory() {
    let mut storage = SqliteStorage::in_memory().unwrap();
    storage.set("[]").unwrap();
    assert_eq!(storage.get().unwrap(), Some("[]".to_string()));
}
