//! Key-value namespace persisted as a single JSON object file.

use async_trait::async_trait;
use log::warn;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use steplog_core::config::StoreConfig;
use steplog_core::kv::KeyValueStoreTrait;
use steplog_core::{Error, Result};

type Namespace = BTreeMap<String, String>;

/// String key-value store backed by one JSON file.
///
/// Each write rewrites the whole file through a temporary file and a rename.
/// There is no locking: concurrent writers race and the last rename wins.
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.kv_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the namespace. A missing file is empty; so is an unreadable one,
    /// after a warning.
    async fn load_namespace(&self) -> Result<Namespace> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Namespace::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Namespace>(&raw) {
            Ok(namespace) => Ok(namespace),
            Err(e) => {
                warn!(
                    "Key-value file {} is corrupt, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Namespace::new())
            }
        }
    }

    async fn persist_namespace(&self, namespace: &Namespace) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_json::to_vec(namespace)?;
        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        tokio::fs::write(&temp_path, payload).await?;

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(Error::KeyValue(format!(
                "failed to finalize {}: {}",
                self.path.display(),
                e
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStoreTrait for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut namespace = self.load_namespace().await?;
        Ok(namespace.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut namespace = self.load_namespace().await?;
        namespace.insert(key.to_string(), value.to_string());
        self.persist_namespace(&namespace).await
    }
}
