use log::{debug, info};
use std::fs;
use std::path::Path;

use diesel::connection::{Connection, SimpleConnection};
use diesel::sqlite::SqliteConnection;
use tokio::task;

use crate::errors::{IntoCore, StorageError};
use steplog_core::config::StoreConfig;
use steplog_core::errors::{Error, Result};

const CREATE_ACTIVITIES_TABLE: &str = "CREATE TABLE IF NOT EXISTS activities (id INTEGER PRIMARY KEY AUTOINCREMENT, steps INTEGER, date INTEGER);";

/// Creates the database file (and its directory) if needed and ensures the
/// activities table exists.
pub fn init(db_path: &str) -> Result<()> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir).map_err(StorageError::from)?;
        }
    }

    let mut conn = establish_connection(db_path)?;
    conn.batch_execute(CREATE_ACTIVITIES_TABLE).into_core()?;

    info!("Activities table ready in {}", db_path);
    Ok(())
}

/// Opens a fresh connection. Connections are not pooled; every store call
/// opens its own.
pub fn establish_connection(db_path: &str) -> Result<SqliteConnection> {
    debug!("Opening activity database at {}", db_path);
    SqliteConnection::establish(db_path).into_core()
}

pub fn get_db_path(config: &StoreConfig) -> String {
    config.db_path().to_string_lossy().to_string()
}

/// Runs `job` on Tokio's blocking pool with a newly opened connection.
pub async fn with_connection<F, T>(db_path: &str, job: F) -> Result<T>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let db_path = db_path.to_string();
    run_blocking(move || {
        let mut conn = establish_connection(&db_path)?;
        job(&mut conn)
    })
    .await
}

pub(crate) async fn run_blocking<F, T>(job: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(job)
        .await
        .map_err(|e| Error::from(StorageError::TaskFailed(e.to_string())))?
}
