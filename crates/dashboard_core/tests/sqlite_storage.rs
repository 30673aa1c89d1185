use dashboard_core::db::{
    open_db, open_db_in_memory, stored_schema_version, DbError, SCHEMA_VERSION,
};
use dashboard_core::{
    Entity, EntityStore, KeyValueStore, Product, SqliteKeyValueStore, StorageError,
};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_kv_entries() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(stored_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, SCHEMA_VERSION);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn set_get_remove_and_clear() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteKeyValueStore::new(&conn);

    assert_eq!(storage.get_item("orders").unwrap(), None);
    storage.set_item("orders", "[]").unwrap();
    storage.set_item("orders", "[1]").unwrap();
    storage.set_item("products", "[2]").unwrap();
    assert_eq!(storage.get_item("orders").unwrap().as_deref(), Some("[1]"));
    assert_eq!(
        storage.keys().unwrap(),
        vec!["orders".to_string(), "products".to_string()]
    );

    storage.remove_item("orders").unwrap();
    assert_eq!(storage.get_item("orders").unwrap(), None);

    storage.clear().unwrap();
    assert!(storage.keys().unwrap().is_empty());
}

#[test]
fn quota_rejects_oversized_write_and_keeps_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteKeyValueStore::with_quota(&conn, 16);

    storage.set_item("k", "small").unwrap();
    let err = storage.set_item("k", "definitely too large").unwrap_err();

    assert!(matches!(
        err,
        StorageError::QuotaExceeded {
            quota_bytes: 16,
            ..
        }
    ));
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("small"));
}

#[test]
fn store_survives_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.db");

    let added_id = {
        let conn = open_db(&path).unwrap();
        let storage = SqliteKeyValueStore::new(&conn);
        let mut store = EntityStore::<Product, _>::load(&storage);
        store.commit_delete(1);
        store
            .commit_add(Product {
                name: "Standing Desk".to_string(),
                price: Some(349.0),
                stock: Some(4),
                ..Product::default()
            })
            .id
            .unwrap()
    };

    let conn = open_db(&path).unwrap();
    let storage = SqliteKeyValueStore::new(&conn);
    let store = EntityStore::<Product, _>::load(&storage);

    let ids: Vec<i64> = store.records().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, added_id]);
    assert_eq!(store.get(added_id).unwrap().name, "Standing Desk");
    assert_ne!(store.records(), Product::seed().as_slice());
}

#[test]
fn reopening_a_stamped_file_keeps_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stamped.db");
    {
        let conn = open_db(&path).unwrap();
        SqliteKeyValueStore::new(&conn)
            .set_item("orders", "[]")
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(stored_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    let raw = Connection::open(&path).unwrap();
    assert_eq!(stored_schema_version(&raw).unwrap(), SCHEMA_VERSION);
    assert_eq!(
        SqliteKeyValueStore::new(&conn)
            .get_item("orders")
            .unwrap()
            .as_deref(),
        Some("[]")
    );
}
