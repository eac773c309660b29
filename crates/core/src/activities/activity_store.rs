use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::activities::activities_model::*;
use crate::activities::{ActivityRepositoryTrait, ActivitySnapshotStoreTrait, ActivityStoreTrait};
use crate::Result;

/// Engine that served a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageEngine {
    Primary,
    Fallback,
}

/// Activity store with a reactive fallback.
///
/// Every call attempts the primary engine first. When the primary returns
/// an error the call is redone against the snapshot store. Nothing is
/// sticky: the next call tries the primary again, and the two stores are
/// never reconciled.
pub struct ActivityStore {
    primary: Arc<dyn ActivityRepositoryTrait>,
    fallback: Arc<dyn ActivitySnapshotStoreTrait>,
    degraded: AtomicBool,
}

impl ActivityStore {
    pub fn new(
        primary: Arc<dyn ActivityRepositoryTrait>,
        fallback: Arc<dyn ActivitySnapshotStoreTrait>,
    ) -> Self {
        Self {
            primary,
            fallback,
            degraded: AtomicBool::new(false),
        }
    }

    /// Picks the engine for a call from the primary's result.
    fn select_engine<T>(&self, operation: &str, result: &Result<T>) -> StorageEngine {
        let engine = match result {
            Ok(_) => StorageEngine::Primary,
            Err(e) => {
                warn!("Error {} on primary engine, using fallback store: {}", operation, e);
                StorageEngine::Fallback
            }
        };
        self.mark_served_by(engine);
        engine
    }

    fn mark_served_by(&self, engine: StorageEngine) {
        self.degraded
            .store(engine == StorageEngine::Fallback, Ordering::Relaxed);
    }

    async fn load_fallback(&self) -> Vec<Activity> {
        match self.fallback.load_activities().await {
            Ok(activities) => activities,
            Err(e) => {
                error!("Error reading fallback activities: {}", e);
                Vec::new()
            }
        }
    }

    async fn save_fallback(&self, operation: &str, activities: &[Activity]) {
        if let Err(e) = self.fallback.save_activities(activities).await {
            error!("Error {} in fallback store: {}", operation, e);
        }
        self.mark_served_by(StorageEngine::Fallback);
    }
}

#[async_trait]
impl ActivityStoreTrait for ActivityStore {
    async fn initialize(&self) {
        match self.primary.initialize().await {
            Ok(()) => info!("Activity database initialized successfully"),
            Err(e) => error!("Activity database initialization error: {}", e),
        }
    }

    async fn list(&self) -> Vec<Activity> {
        let result = self.primary.get_activities().await;
        match self.select_engine("fetching activities", &result) {
            StorageEngine::Primary => result.unwrap_or_default(),
            StorageEngine::Fallback => self.load_fallback().await,
        }
    }

    async fn insert(&self, steps: i64, date: i64) {
        let new_activity = NewActivity::new(steps, date);
        let result = self.primary.create_activity(new_activity).await;
        if self.select_engine("adding activity", &result) == StorageEngine::Primary {
            return;
        }

        // Read through list() so a primary that can still read seeds the snapshot.
        let current = self.list().await;
        let Some(activity_id) = next_activity_id(&current) else {
            error!("Error adding activity to fallback store: activity ids exhausted");
            self.mark_served_by(StorageEngine::Fallback);
            return;
        };
        let activity = new_activity.with_id(activity_id);
        debug!("Adding activity {} to fallback store", activity.id);

        let mut updated = Vec::with_capacity(current.len() + 1);
        updated.push(activity);
        updated.extend(current);
        self.save_fallback("adding activity", &updated).await;
    }

    async fn delete_one(&self, activity_id: i64) {
        let result = self.primary.delete_activity(activity_id).await;
        if self.select_engine("deleting activity", &result) == StorageEngine::Primary {
            return;
        }

        let remaining: Vec<Activity> = self
            .list()
            .await
            .into_iter()
            .filter(|activity| activity.id != activity_id)
            .collect();
        self.save_fallback("deleting activity", &remaining).await;
    }

    async fn delete_all(&self) {
        let result = self.primary.delete_all_activities().await;
        if self.select_engine("deleting all activities", &result) == StorageEngine::Primary {
            return;
        }

        self.save_fallback("deleting all activities", &[]).await;
    }

    fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }
}
