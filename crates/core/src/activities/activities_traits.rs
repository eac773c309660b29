use super::activities_model::*;
use crate::Result;
use async_trait::async_trait;

/// Contract for the primary (structured, queryable) activity engine.
///
/// Every method reports engine failure through `Err`; choosing what to do
/// about it is left to [`ActivityStoreTrait`] implementations.
#[async_trait]
pub trait ActivityRepositoryTrait: Send + Sync {
    /// Opens or creates the backing storage and ensures the table exists.
    async fn initialize(&self) -> Result<()>;
    /// All activities, newest `date` first.
    async fn get_activities(&self) -> Result<Vec<Activity>>;
    async fn create_activity(&self, new_activity: NewActivity) -> Result<()>;
    /// Deleting an unknown id succeeds without effect.
    async fn delete_activity(&self, activity_id: i64) -> Result<()>;
    async fn delete_all_activities(&self) -> Result<()>;
}

/// Contract for the fallback store: the whole collection is read and
/// written as one serialized snapshot.
#[async_trait]
pub trait ActivitySnapshotStoreTrait: Send + Sync {
    /// The stored collection in stored order; empty when nothing was saved.
    async fn load_activities(&self) -> Result<Vec<Activity>>;
    /// Overwrites the stored collection.
    async fn save_activities(&self, activities: &[Activity]) -> Result<()>;
}

/// The activity store consumed by view code.
///
/// No method returns an error: engine failures are logged and turned into
/// a fallback result or a no-op.
#[async_trait]
pub trait ActivityStoreTrait: Send + Sync {
    async fn initialize(&self);
    async fn list(&self) -> Vec<Activity>;
    async fn insert(&self, steps: i64, date: i64);
    async fn delete_one(&self, activity_id: i64);
    async fn delete_all(&self);
    /// Whether the most recent operation was served by the fallback store.
    fn is_degraded(&self) -> bool;
}

/// Trait defining the contract for Activity service operations.
#[async_trait]
pub trait ActivityServiceTrait: Send + Sync {
    async fn initialize(&self);
    async fn get_activities(&self) -> Vec<Activity>;
    /// Records `steps` stamped with the current time. Rejects `steps <= 0`.
    async fn add_activity(&self, steps: i64) -> Result<()>;
    /// Parses raw form input and records it like [`Self::add_activity`].
    async fn add_activity_from_input(&self, input: &str) -> Result<()>;
    async fn delete_activity(&self, activity_id: i64);
    async fn delete_all_activities(&self);
}
