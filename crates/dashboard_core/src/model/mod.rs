//! Dashboard domain records.
//!
//! # Responsibility
//! - Define the record shapes persisted by each CRUD page.
//! - Describe, per record type, the storage key, searchable text and status
//!   vocabulary consumed by the generic store and view filter.
//!
//! # Invariants
//! - Every list record is identified by a stable `RecordId`.
//! - Field names serialize in camelCase to match the persisted JSON blobs.
//! - Missing fields in persisted JSON fall back to `Default`, so records
//!   written by an older shape still load.

pub mod customer;
pub mod entity;
pub mod order;
pub mod product;
pub mod profile;
