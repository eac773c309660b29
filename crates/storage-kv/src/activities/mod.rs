//! Serialized-blob storage for activities.

mod repository;

pub use repository::KvActivitySnapshotStore;
