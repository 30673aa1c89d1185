//! Smoke entry point.
//!
//! Wires configuration, logging, the SQLite medium and every store, then
//! prints one summary line per key.

use dashboard_core::db::{open_db, open_db_in_memory};
use dashboard_core::{
    email_notifications_preference, init_logging, profile_preference, CoreConfig, Customer,
    Entity, EntityStore, KeyValueStore, Order, Product, SqliteKeyValueStore,
};
use log::info;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    let conn = match &config.db_path {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let storage = match config.storage_quota_bytes {
        Some(quota) => SqliteKeyValueStore::with_quota(&conn, quota),
        None => SqliteKeyValueStore::new(&conn),
    };

    println!("dashboard_core version={}", dashboard_core::core_version());
    print_summary::<Order, _>(&storage);
    print_summary::<Product, _>(&storage);
    print_summary::<Customer, _>(&storage);

    let profile = profile_preference(&storage);
    let notifications = email_notifications_preference(&storage);
    println!(
        "{} user={} email_notifications={}",
        profile.key(),
        profile.get().username,
        notifications.get()
    );

    info!("event=cli_summary module=cli status=ok");
    Ok(())
}

fn print_summary<T: Entity, S: KeyValueStore>(storage: &S) {
    let store = EntityStore::<T, S>::load(storage);
    println!("{} records={}", store.key(), store.len());
}
