//! Key-value fallback storage for steplog.
//!
//! Provides a local key-value namespace persisted as one JSON file
//! ([`FileKeyValueStore`]) and the activity snapshot store that keeps the
//! whole activity collection as a single serialized blob under one key
//! ([`KvActivitySnapshotStore`]). `steplog-core` uses the latter when the
//! primary SQLite engine fails.

pub mod activities;
pub mod file_store;

pub use activities::KvActivitySnapshotStore;
pub use file_store::FileKeyValueStore;
