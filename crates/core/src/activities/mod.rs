//! Activities module - domain models, the failover store, services, and traits.

mod activities_model;
mod activities_service;
mod activities_traits;
mod activity_store;



pub use activities_model::{format_timestamp_millis, next_activity_id, Activity, NewActivity};
pub use activities_service::{parse_steps_input, ActivityService, INVALID_STEPS_MESSAGE};
pub use activities_traits::{
    ActivityRepositoryTrait, ActivityServiceTrait, ActivitySnapshotStoreTrait, ActivityStoreTrait,
};
pub use activity_store::{ActivityStore, StorageEngine};
