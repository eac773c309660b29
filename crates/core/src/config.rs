//! Store configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{ACTIVITIES_STORAGE_KEY, DEFAULT_DB_FILE_NAME, DEFAULT_KV_FILE_NAME};

/// Where the primary database and the fallback namespace live on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    pub app_data_dir: PathBuf,
    pub db_file_name: String,
    pub kv_file_name: String,
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            app_data_dir: PathBuf::from("."),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            kv_file_name: DEFAULT_KV_FILE_NAME.to_string(),
            storage_key: ACTIVITIES_STORAGE_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Default file names rooted at `app_data_dir`.
    pub fn from_app_data_dir(app_data_dir: impl AsRef<Path>) -> Self {
        Self {
            app_data_dir: app_data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.app_data_dir.join(&self.db_file_name)
    }

    pub fn kv_path(&self) -> PathBuf {
        self.app_data_dir.join(&self.kv_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = StoreConfig::from_app_data_dir("/data/steplog");
        assert_eq!(config.db_path(), PathBuf::from("/data/steplog/activities.db"));
        assert_eq!(config.kv_path(), PathBuf::from("/data/steplog/kv-store.json"));
        assert_eq!(config.storage_key, "activities");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"appDataDir":"/tmp/steps","dbFileName":"steps.db"}"#)
                .unwrap();
        assert_eq!(config.db_path(), PathBuf::from("/tmp/steps/steps.db"));
        assert_eq!(config.kv_file_name, DEFAULT_KV_FILE_NAME);
        assert_eq!(config.storage_key, ACTIVITIES_STORAGE_KEY);
    }
}
