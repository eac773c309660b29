//! steplog Core - Domain entities, the failover activity store, and services.
//!
//! This crate contains the business logic of the step logger. It is
//! storage-agnostic and defines the traits implemented by the
//! `storage-sqlite` (primary engine) and `storage-kv` (fallback) crates.

pub mod activities;
pub mod config;
pub mod constants;
pub mod errors;
pub mod kv;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
