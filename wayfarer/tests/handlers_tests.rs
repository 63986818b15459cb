use std::collections::BTreeSet;
use tempfile::TempDir;
use wayfarer::config::{Backend, Config};
use wayfarer::handlers::*;
use wayfarer_core::catalog;
use wayfarer_core::model::RegionType;
use wayfarer_core::query;
use wayfarer_core::store::StoreState;
use wayfarer_core::topology::{Feature, highlight};

fn config_in(dir: &TempDir, backend: Backend) -> Config {
    Config {
        data_dir: dir.path().join("wayfarer"),
        backend,
        log_filter: "warn".to_string(),
    }
}

#[test]
fn test_parse_region_type() {
    assert_eq!(parse_region_type("us"), Ok(RegionType::UsState));
    assert_eq!(parse_region_type("WORLD"), Ok(RegionType::Country));
    assert_eq!(parse_region_type("US_STATE"), Ok(RegionType::UsState));
    assert!(parse_region_type("moon").unwrap_err().contains("Unknown region type"));
}

#[test]
fn test_resolve_toggle_target_full_id() {
    assert_eq!(
        resolve_toggle_target("US_STATE:CA", None),
        Ok("US_STATE:CA".to_string())
    );
    assert_eq!(
        resolve_toggle_target(" country:fr ", Some(RegionType::UsState)),
        Ok("COUNTRY:FR".to_string())
    );
}

#[test]
fn test_resolve_toggle_target_bare_code() {
    assert_eq!(
        resolve_toggle_target("ca", Some(RegionType::Country)),
        Ok("COUNTRY:CA".to_string())
    );
    assert!(resolve_toggle_target("CA", None).is_err());
}

#[test]
fn test_render_region_list() {
    let mut regions = catalog::all_regions();
    regions = wayfarer_core::store::toggled(&regions, "US_STATE:CO", chrono::Utc::now());

    let all = render_region_list(&regions, RegionType::UsState, false);
    assert!(all.contains("US States"));
    assert!(all.contains("1 / 50 visited"));
    assert!(all.contains("Colorado"));
    assert!(all.contains("Wyoming"));
    assert!(!all.contains("France"));

    let visited = render_region_list(&regions, RegionType::UsState, true);
    assert!(visited.contains("Colorado"));
    assert!(!visited.contains("Wyoming"));

    let none = render_region_list(&regions, RegionType::Country, true);
    assert!(none.contains("Nothing visited yet."));
}

#[test]
fn test_render_progress() {
    let regions = catalog::all_regions();
    let line = render_progress(&query::progress(&regions, RegionType::Country));
    assert!(line.contains("Countries"));
    assert!(line.contains("0 / 15"));
    assert!(line.contains("0% visited"));
}

#[test]
fn test_render_map() {
    let features = vec![
        Feature { id: "06".to_string(), name: Some("California".to_string()) },
        Feature { id: "11".to_string(), name: Some("District of Columbia".to_string()) },
        Feature { id: "48".to_string(), name: Some("Texas".to_string()) },
    ];
    let visited: BTreeSet<String> = ["CA".to_string()].into_iter().collect();
    let highlights = highlight(&features, RegionType::UsState, &visited);

    let out = render_map(&highlights, false);
    assert!(out.contains("California"));
    assert!(!out.contains("District of Columbia"));
    assert!(out.contains("3 features, 2 matched, 1 highlighted"));

    let out = render_map(&highlights, true);
    assert!(out.contains("District of Columbia"));
}

#[test]
fn test_open_store_without_data_dir_is_detached() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, Backend::Sqlite);

    let mut store = config.open_store().unwrap();
    store.request_toggle("US_STATE:CA").unwrap();

    assert!(!config.data_dir.exists());
    assert!(!config.snapshot_exists().unwrap());
}

#[test]
fn test_create_store_json_backend_persists() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, Backend::Json);

    let mut store = config.create_store().unwrap();
    store.reset().unwrap();
    assert!(config.snapshot_exists().unwrap());
    store.toggle("COUNTRY:IE").unwrap();

    let mut reopened = config.open_store().unwrap();
    assert_eq!(reopened.state(), StoreState::Uninitialized);
    let codes = reopened.request_visited_codes(RegionType::Country);
    assert_eq!(codes.into_iter().collect::<Vec<_>>(), vec!["IE"]);
}

#[test]
fn test_create_store_sqlite_backend_persists() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, Backend::Sqlite);

    {
        let mut store = config.create_store().unwrap();
        assert!(!config.snapshot_exists().unwrap());
        store.request_toggle("US_STATE:HI").unwrap();
    }

    assert!(config.db_path().exists());
    assert!(config.snapshot_exists().unwrap());
    let mut reopened = config.open_store().unwrap();
    let codes = reopened.request_visited_codes(RegionType::UsState);
    assert_eq!(codes.into_iter().collect::<Vec<_>>(), vec!["HI"]);
}

#[test]
fn test_open_store_with_damaged_database_seeds_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, Backend::Sqlite);
    std::fs::create_dir_all(&config.data_dir).unwrap();
    std::fs::write(config.db_path(), b"this is not a sqlite database, just some bytes").unwrap();

    let mut store = config.open_store().unwrap();

    assert!(store.is_detached());
    assert_eq!(store.request_load(), catalog::all_regions().as_slice());
    // Toggling still works in memory
    store.request_toggle("US_STATE:AK").unwrap();
}

#[test]
fn test_open_store_without_data_dir_cannot_be_reset() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, Backend::Json);

    let store = config.open_store().unwrap();
    assert!(store.is_detached());

    let store = config.create_store().unwrap();
    assert!(!store.is_detached());
}

#[test]
fn test_last_saved_does_not_create_database() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_in(&temp_dir, Backend::Sqlite);
    std::fs::create_dir_all(&config.data_dir).unwrap();

    assert!(last_saved(&config).is_none());
    assert!(!config.db_path().exists());

    let mut store = config.create_store().unwrap();
    store.reset().unwrap();
    assert!(last_saved(&config).is_some());
}
