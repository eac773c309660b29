use async_trait::async_trait;

use crate::errors::Result;

/// A local string key-value namespace.
#[async_trait]
pub trait KeyValueStoreTrait: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the key is absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
