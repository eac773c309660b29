use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use steplog_core::activities::{Activity, ActivitySnapshotStoreTrait};
use steplog_core::config::StoreConfig;
use steplog_core::kv::KeyValueStoreTrait;
use steplog_core::Result;

/// Keeps the activity collection as one JSON array under a fixed key.
pub struct KvActivitySnapshotStore {
    kv_store: Arc<dyn KeyValueStoreTrait>,
    storage_key: String,
}

impl KvActivitySnapshotStore {
    pub fn new(kv_store: Arc<dyn KeyValueStoreTrait>, storage_key: impl Into<String>) -> Self {
        Self {
            kv_store,
            storage_key: storage_key.into(),
        }
    }

    pub fn from_config(kv_store: Arc<dyn KeyValueStoreTrait>, config: &StoreConfig) -> Self {
        Self::new(kv_store, config.storage_key.clone())
    }
}

#[async_trait]
impl ActivitySnapshotStoreTrait for KvActivitySnapshotStore {
    async fn load_activities(&self) -> Result<Vec<Activity>> {
        let Some(json_value) = self.kv_store.get_item(&self.storage_key).await? else {
            return Ok(Vec::new());
        };

        // A stored `null` reads as an empty collection too.
        match serde_json::from_str::<Option<Vec<Activity>>>(&json_value) {
            Ok(activities) => Ok(activities.unwrap_or_default()),
            Err(e) => {
                warn!(
                    "Fallback activities under '{}' are corrupt, treating as empty: {}",
                    self.storage_key, e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save_activities(&self, activities: &[Activity]) -> Result<()> {
        let json_value = serde_json::to_string(activities)?;
        self.kv_store.set_item(&self.storage_key, &json_value).await
    }
}
