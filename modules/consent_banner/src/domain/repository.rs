//! Repository traits for external collaborators
//!
//! The option store and the page directory belong to the host environment.
//! Implementations are in infra/.

use crate::contract::{Page, SettingsMap};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence boundary for the flat options map.
///
/// The store is treated as an opaque key/value document store: one key,
/// one whole map. No multi-key transactions are assumed; concurrent admin
/// saves are last-write-wins.
#[async_trait]
pub trait OptionStore: Send + Sync {
    /// Read the options map stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<SettingsMap>>;

    /// Replace the options map stored under `key`.
    ///
    /// Returns `false` when the backend reports the write was a no-op.
    async fn set(&self, key: &str, options: &SettingsMap) -> Result<bool>;
}

/// Read-only view of the host's pages, used by the admin page picker.
#[async_trait]
pub trait PageDirectory: Send + Sync {
    /// List all pages as (id, title) pairs
    async fn list_pages(&self) -> Result<Vec<Page>>;
}
