//! Core data layer for the admin dashboard.
//! Owns the consistency contract of every persisted list and preference;
//! presentation layers only read views and drive forms.

pub mod config;
pub mod db;
pub mod form;
pub mod logging;
pub mod model;
pub mod page;
pub mod persistence;
pub mod preference;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{ConfigError, CoreConfig};
pub use form::{FieldError, FormBuffer, FormMode, FormRecord};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::customer::{Customer, CustomerStatus};
pub use model::entity::{Entity, RecordId, Status};
pub use model::order::{Order, OrderStatus};
pub use model::product::{Product, ProductStatus};
pub use model::profile::{PasswordChange, PasswordError, Profile};
pub use page::CrudPage;
pub use persistence::PersistenceBridge;
pub use preference::{email_notifications_preference, profile_preference, Preference};
pub use storage::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use store::{ClockIdSource, Commit, EntityStore, IdSource, SequenceIdSource};
pub use view::{filter_records, FilteredView, StatusFilter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
