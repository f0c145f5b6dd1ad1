//! Domain service - business logic orchestration

use super::defaults::{default_settings, merge_over_defaults};
use super::display::should_display_for;
use super::events::{BannerEvent, EventPublisher};
use super::repository::{OptionStore, PageDirectory};
use super::sanitize::sanitize;
use crate::config::Config;
use crate::contract::{ConsentError, ConsentState, Page, PageView, SettingsMap};
use crate::render;
use std::sync::Arc;

/// Domain service for banner rendering and settings management
pub struct Service {
    store: Arc<dyn OptionStore>,
    pages: Arc<dyn PageDirectory>,
    events: Arc<dyn EventPublisher>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        store: Arc<dyn OptionStore>,
        pages: Arc<dyn PageDirectory>,
        events: Arc<dyn EventPublisher>,
        config: Config,
    ) -> Self {
        Self {
            store,
            pages,
            events,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Seed the option store with defaults when no map exists yet.
    ///
    /// Mirrors install-time behavior: a fresh site gets a complete map so
    /// the admin form shows concrete values from its first load.
    pub async fn ensure_defaults(&self) -> Result<(), ConsentError> {
        let existing = self
            .store
            .get(&self.config.options_key)
            .await
            .map_err(storage_error)?;

        if existing.is_none() {
            let defaults = default_settings();
            self.store
                .set(&self.config.options_key, &defaults)
                .await
                .map_err(storage_error)?;
            tracing::info!(key = %self.config.options_key, "seeded default banner options");
        }
        Ok(())
    }

    /// Stored options merged over the built-in defaults.
    pub async fn settings_view(&self) -> Result<SettingsMap, ConsentError> {
        let stored = self
            .store
            .get(&self.config.options_key)
            .await
            .map_err(storage_error)?
            .unwrap_or_default();
        Ok(merge_over_defaults(&stored))
    }

    /// Sanitize an admin form payload, merge it over the stored map and
    /// persist the result wholesale. Last write wins.
    pub async fn save_settings(
        &self,
        raw: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<SettingsMap, ConsentError> {
        let clean = sanitize(raw);

        let mut merged = self
            .store
            .get(&self.config.options_key)
            .await
            .map_err(storage_error)?
            .unwrap_or_else(default_settings);

        let mut changed_keys = Vec::new();
        for (key, value) in clean {
            if merged.get(&key) != Some(&value) {
                changed_keys.push(key.clone());
            }
            merged.insert(key, value);
        }

        self.store
            .set(&self.config.options_key, &merged)
            .await
            .map_err(storage_error)?;

        tracing::info!(
            changed = changed_keys.len(),
            key = %self.config.options_key,
            "saved banner options"
        );

        let event = BannerEvent::settings_saved(&self.config.options_key, changed_keys);
        if let Err(e) = self.events.publish(event).await {
            // Log but do not fail the save
            tracing::warn!(error = %e, "failed to publish settings-saved event");
        }

        Ok(merged)
    }

    /// Render the banner fragment for a page view.
    ///
    /// Returns `None` when the visitor already made a decision or the
    /// display rules exclude the page.
    pub async fn render_banner(
        &self,
        page: PageView,
        consent: ConsentState,
    ) -> Result<Option<String>, ConsentError> {
        if consent != ConsentState::Unset {
            return Ok(None);
        }

        let view = self.settings_view().await?;
        if !should_display_for(&view, page) {
            tracing::debug!(page_id = page.page_id, "display rules suppressed banner");
            return Ok(None);
        }

        Ok(Some(render::banner(&view, &self.config)))
    }

    /// Pages for the admin page picker.
    pub async fn list_pages(&self) -> Result<Vec<Page>, ConsentError> {
        self.pages.list_pages().await.map_err(|e| {
            tracing::error!(error = %e, "page directory lookup failed");
            ConsentError::PageDirectory {
                reason: e.to_string(),
            }
        })
    }
}

fn storage_error(e: anyhow::Error) -> ConsentError {
    tracing::error!(error = %e, "option store failure");
    ConsentError::Storage {
        reason: e.to_string(),
    }
}
