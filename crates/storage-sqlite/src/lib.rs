//! SQLite storage implementation for steplog.
//!
//! This crate is the primary activity engine. It implements
//! `ActivityRepositoryTrait` from `steplog-core` with Diesel over a single
//! SQLite file and contains:
//! - Per-call connection management
//! - Table creation for the activities schema
//! - The activity repository and its Diesel row types
//!
//! # Architecture
//!
//! ```text
//!            core (domain, ActivityStore)
//!                  │
//!        ┌─────────┴──────────┐
//!        ▼                    ▼
//! storage-sqlite        storage-kv
//!  (this crate)         (fallback)
//!        │                    │
//!        ▼                    ▼
//!    SQLite DB          JSON key-value file
//! ```

pub mod activities;
pub mod db;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{establish_connection, get_db_path, init, with_connection};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use activities::SqliteActivityRepository;

// Re-export from steplog-core for convenience
pub use steplog_core::errors::{DatabaseError, Error, Result};
