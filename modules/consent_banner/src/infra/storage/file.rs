//! JSON-file option store

use super::mapper::{json_to_map, map_to_json};
use crate::contract::SettingsMap;
use crate::domain::repository::OptionStore;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Errors raised by the file-backed store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("option file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("option file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Option store persisting all option documents in one JSON file,
/// keyed by option name. Writes replace the whole file; concurrent
/// admin saves are last-write-wins.
pub struct JsonFileOptionStore {
    path: PathBuf,
}

impl JsonFileOptionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<serde_json::Map<String, Value>, StorageError> {
        if !Path::new(&self.path).exists() {
            return Ok(serde_json::Map::new());
        }
        let bytes = tokio::fs::read(&self.path).await?;
        let value: Value = serde_json::from_slice(&bytes)?;
        Ok(value.as_object().cloned().unwrap_or_default())
    }

    async fn persist(&self, root: &serde_json::Map<String, Value>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(&Value::Object(root.clone()))?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl OptionStore for JsonFileOptionStore {
    async fn get(&self, key: &str) -> Result<Option<SettingsMap>> {
        let root = self.load().await?;
        Ok(root.get(key).map(json_to_map))
    }

    async fn set(&self, key: &str, options: &SettingsMap) -> Result<bool> {
        let mut root = self.load().await?;
        root.insert(key.to_string(), map_to_json(options));
        self.persist(&root).await?;
        Ok(true)
    }
}
