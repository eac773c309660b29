//! End-to-end checks of the failover store over the real SQLite engine and
//! the real JSON key-value fallback.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use steplog_core::activities::{
    Activity, ActivityService, ActivityServiceTrait, ActivityStore, ActivityStoreTrait,
};
use steplog_core::config::StoreConfig;
use steplog_storage_kv::{FileKeyValueStore, KvActivitySnapshotStore};
use steplog_storage_sqlite::{get_db_path, SqliteActivityRepository};
use tempfile::{tempdir, TempDir};

fn build_store(config: &StoreConfig) -> ActivityStore {
    let primary = SqliteActivityRepository::new(get_db_path(config));
    let kv_store = Arc::new(FileKeyValueStore::from_config(config));
    let fallback = KvActivitySnapshotStore::from_config(kv_store, config);
    ActivityStore::new(Arc::new(primary), Arc::new(fallback))
}

/// Store with a working primary engine.
async fn healthy_store() -> (ActivityStore, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = build_store(&StoreConfig::from_app_data_dir(temp_dir.path()));
    store.initialize().await;
    (store, temp_dir)
}

/// Store whose database sits under a regular file, so every primary call
/// fails while the fallback file next to it still works.
async fn broken_primary_store() -> (ActivityStore, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    std::fs::write(temp_dir.path().join("blocker"), b"not a directory").unwrap();

    let config = StoreConfig {
        app_data_dir: temp_dir.path().to_path_buf(),
        db_file_name: "blocker/activities.db".to_string(),
        ..StoreConfig::default()
    };
    let store = build_store(&config);
    store.initialize().await;
    (store, temp_dir)
}

fn steps_and_dates(activities: &[Activity]) -> Vec<(i64, i64)> {
    activities.iter().map(|a| (a.steps, a.date)).collect()
}

fn read_fallback_blob(dir: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.join("kv-store.json")).expect("no fallback file");
    let namespace: serde_json::Value = serde_json::from_str(&raw).unwrap();
    serde_json::from_str(namespace["activities"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn scenario_a_lists_newest_first() {
    let (store, _temp_dir) = healthy_store().await;

    store.insert(1000, 1000).await;
    store.insert(2000, 2000).await;

    let listed = store.list().await;
    assert_eq!(steps_and_dates(&listed), vec![(2000, 2000), (1000, 1000)]);
    assert!(!store.is_degraded());
}

#[tokio::test]
async fn scenario_b_delete_one() {
    let (store, _temp_dir) = healthy_store().await;

    store.insert(500, 1).await;
    let id = store.list().await[0].id;
    store.delete_one(id).await;

    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn scenario_c_delete_all() {
    let (store, _temp_dir) = healthy_store().await;

    store.insert(1, 1).await;
    store.insert(2, 2).await;
    store.insert(3, 3).await;
    store.delete_all().await;

    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn scenario_d_fallback_ids_start_at_one() {
    let (store, temp_dir) = broken_primary_store().await;

    store.insert(10, 5).await;
    store.insert(10, 5).await;

    let listed = store.list().await;
    assert_eq!(listed.len(), 2);
    let ids: HashSet<i64> = listed.iter().map(|a| a.id).collect();
    assert_eq!(ids, HashSet::from([1, 2]));
    assert!(store.is_degraded());

    assert_eq!(
        read_fallback_blob(temp_dir.path()),
        serde_json::json!([
            {"id": 2, "steps": 10, "date": 5},
            {"id": 1, "steps": 10, "date": 5}
        ])
    );
}

#[tokio::test]
async fn ordering_is_reverse_insertion_on_both_engines() {
    for (store, _temp_dir) in [healthy_store().await, broken_primary_store().await] {
        for date in [10, 20, 30, 40] {
            store.insert(date * 3, date).await;
        }

        let dates: Vec<i64> = store.list().await.iter().map(|a| a.date).collect();
        assert_eq!(dates, vec![40, 30, 20, 10]);
    }
}

#[tokio::test]
async fn delete_missing_id_and_delete_all_on_both_engines() {
    for (store, _temp_dir) in [healthy_store().await, broken_primary_store().await] {
        store.insert(100, 1).await;
        store.insert(200, 2).await;
        let before = store.list().await;

        store.delete_one(12345).await;
        assert_eq!(store.list().await, before);

        store.delete_all().await;
        assert!(store.list().await.is_empty());
        store.delete_all().await;
        assert!(store.list().await.is_empty());
    }
}

#[tokio::test]
async fn uninitialized_database_falls_back() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let store = build_store(&StoreConfig::from_app_data_dir(temp_dir.path()));

    // No initialize(): the table is missing, so every call uses the fallback.
    store.insert(700, 7).await;

    let listed = store.list().await;
    assert_eq!(steps_and_dates(&listed), vec![(700, 7)]);
    assert_eq!(listed[0].id, 1);
    assert!(store.is_degraded());

    // Once the table exists the primary is authoritative again and the
    // fallback record is not visible.
    store.initialize().await;
    assert!(store.list().await.is_empty());
    assert!(!store.is_degraded());
}

#[tokio::test]
async fn corrupt_fallback_blob_reads_as_empty() {
    let (store, temp_dir) = broken_primary_store().await;
    std::fs::write(
        temp_dir.path().join("kv-store.json"),
        r#"{"activities":"[{\"id\": oops"}"#,
    )
    .unwrap();

    assert!(store.list().await.is_empty());

    store.insert(42, 9).await;
    assert_eq!(store.list().await[0].id, 1);
}

#[tokio::test]
async fn service_validates_before_storing() {
    let (store, _temp_dir) = healthy_store().await;
    let service = ActivityService::new(Arc::new(store));

    service.add_activity_from_input(" 3200 ").await.unwrap();
    assert!(service.add_activity_from_input("zero").await.is_err());
    assert!(service.add_activity(0).await.is_err());

    let listed = service.get_activities().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].steps, 3200);
    assert!(listed[0].date > 0);
}
