use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;

use steplog_core::activities::{Activity, ActivityRepositoryTrait, NewActivity};
use steplog_core::Result;

use super::model::{ActivityDB, NewActivityDB};
use crate::db::{self, run_blocking, with_connection};
use crate::errors::StorageError;
use crate::schema::activities;

/// Repository for managing activity data in the SQLite database.
///
/// Holds only the database path; each call opens its own connection.
pub struct SqliteActivityRepository {
    db_path: String,
}

impl SqliteActivityRepository {
    /// Creates a new SqliteActivityRepository instance
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for SqliteActivityRepository {
    async fn initialize(&self) -> Result<()> {
        let db_path = self.db_path.clone();
        run_blocking(move || db::init(&db_path)).await
    }

    async fn get_activities(&self) -> Result<Vec<Activity>> {
        with_connection(&self.db_path, |conn| {
            let activities_db = activities::table
                .select(ActivityDB::as_select())
                .order(activities::date.desc())
                .load::<ActivityDB>(conn)
                .map_err(StorageError::from)?;

            Ok(activities_db.into_iter().map(Activity::from).collect())
        })
        .await
    }

    async fn create_activity(&self, new_activity: NewActivity) -> Result<()> {
        with_connection(&self.db_path, move |conn| {
            diesel::insert_into(activities::table)
                .values(NewActivityDB::from(new_activity))
                .execute(conn)
                .map_err(StorageError::from)?;
            Ok(())
        })
        .await
    }

    async fn delete_activity(&self, activity_id: i64) -> Result<()> {
        with_connection(&self.db_path, move |conn| {
            let deleted = diesel::delete(activities::table.find(activity_id))
                .execute(conn)
                .map_err(StorageError::from)?;
            debug!("Deleted {} activity row(s) for id {}", deleted, activity_id);
            Ok(())
        })
        .await
    }

    async fn delete_all_activities(&self) -> Result<()> {
        with_connection(&self.db_path, |conn| {
            diesel::delete(activities::table)
                .execute(conn)
                .map_err(StorageError::from)?;
            Ok(())
        })
        .await
    }
}
