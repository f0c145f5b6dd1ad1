//! In-memory option store

use crate::contract::SettingsMap;
use crate::domain::repository::OptionStore;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Option store backed by a process-local map. Used in tests and by
/// hosts that manage persistence themselves.
#[derive(Clone, Default)]
pub struct MemoryOptionStore {
    data: Arc<RwLock<HashMap<String, SettingsMap>>>,
}

impl MemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OptionStore for MemoryOptionStore {
    async fn get(&self, key: &str) -> Result<Option<SettingsMap>> {
        Ok(self.data.read().get(key).cloned())
    }

    async fn set(&self, key: &str, options: &SettingsMap) -> Result<bool> {
        self.data.write().insert(key.to_string(), options.clone());
        Ok(true)
    }
}
