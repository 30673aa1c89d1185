use dashboard_core::{
    email_notifications_preference, profile_preference, KeyValueStore, MemoryKeyValueStore,
    Preference, Profile,
};

#[test]
fn preferences_default_when_storage_is_empty() {
    let storage = MemoryKeyValueStore::new();

    let profile = profile_preference(&storage);
    let notifications = email_notifications_preference(&storage);

    assert_eq!(profile.get(), &Profile::default());
    assert!(*notifications.get());
    assert!(storage.keys().unwrap().is_empty());
}

#[test]
fn profile_update_is_written_through() {
    let storage = MemoryKeyValueStore::new();
    let mut profile = profile_preference(&storage);

    assert!(profile.update(|profile| {
        profile.set_field("fullName", "Ada Lovelace");
    }));

    let text = storage.get_item("profileData").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["fullName"], "Ada Lovelace");
    assert_eq!(profile_preference(&storage).get().full_name, "Ada Lovelace");
}

#[test]
fn notification_toggle_persists() {
    let storage = MemoryKeyValueStore::new();
    let mut notifications = email_notifications_preference(&storage);

    assert!(notifications.set(false));
    assert_eq!(storage.get_item("emailNotifications").unwrap().as_deref(), Some("false"));
    assert!(!*email_notifications_preference(&storage).get());
}

#[test]
fn corrupt_preference_falls_back_to_default() {
    let storage = MemoryKeyValueStore::new();
    storage.set_item("emailNotifications", "maybe").unwrap();

    let notifications: Preference<'_, bool, _> =
        Preference::load(&storage, "emailNotifications", true);
    assert!(*notifications.get());
}
