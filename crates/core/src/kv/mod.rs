//! Local key-value namespace used by the fallback store.

mod kv_traits;

pub use kv_traits::KeyValueStoreTrait;
