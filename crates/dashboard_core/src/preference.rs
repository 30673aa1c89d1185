//! Single-document write-through values (`profileData`, `emailNotifications`).

use crate::model::profile::{Profile, EMAIL_NOTIFICATIONS_KEY, PROFILE_KEY};
use crate::persistence::PersistenceBridge;
use crate::storage::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// One JSON value under a fixed key, loaded once and mirrored on every change.
pub struct Preference<'s, T, S: KeyValueStore + ?Sized> {
    key: &'static str,
    value: T,
    bridge: PersistenceBridge<'s, S>,
}

impl<'s, T, S> Preference<'s, T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    pub fn load(storage: &'s S, key: &'static str, default: T) -> Self {
        let bridge = PersistenceBridge::new(storage);
        let value = bridge.load_or(key, default);
        Self { key, value, bridge }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and mirrors it. Returns the mirror write outcome.
    pub fn set(&mut self, value: T) -> bool {
        self.value = value;
        self.bridge.save(self.key, &self.value)
    }

    /// Mutates the value in place and mirrors it.
    pub fn update(&mut self, change: impl FnOnce(&mut T)) -> bool {
        change(&mut self.value);
        self.bridge.save(self.key, &self.value)
    }
}

/// Profile document, defaulting to the built-in sample account.
pub fn profile_preference<S: KeyValueStore + ?Sized>(storage: &S) -> Preference<'_, Profile, S> {
    Preference::load(storage, PROFILE_KEY, Profile::default())
}

/// Email notification toggle, on by default.
pub fn email_notifications_preference<S: KeyValueStore + ?Sized>(
    storage: &S,
) -> Preference<'_, bool, S> {
    Preference::load(storage, EMAIL_NOTIFICATIONS_KEY, true)
}
