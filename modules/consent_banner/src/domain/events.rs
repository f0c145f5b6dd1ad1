//! Domain events for the consent banner
//!
//! A settings save is the only state change the module makes; hosts
//! subscribe so they can flush page caches that embed the banner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain event types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum BannerEvent {
    /// The stored options map was replaced by an admin save
    SettingsSaved(SettingsSavedEvent),
}

/// Event data for a settings save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsSavedEvent {
    /// Option-store key the map was written under
    pub options_key: String,
    /// Keys whose values changed in this save
    pub changed_keys: Vec<String>,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl BannerEvent {
    /// Create a new SettingsSaved event
    pub fn settings_saved(options_key: &str, mut changed_keys: Vec<String>) -> Self {
        changed_keys.sort();
        BannerEvent::SettingsSaved(SettingsSavedEvent {
            options_key: options_key.to_string(),
            changed_keys,
            timestamp: Utc::now(),
        })
    }
}

/// Event publisher trait for notifying the host about settings changes
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a banner event
    async fn publish(&self, event: BannerEvent) -> anyhow::Result<()>;
}

/// No-op event publisher for testing or when events are disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: BannerEvent) -> anyhow::Result<()> {
        // No-op: events are not published
        Ok(())
    }
}
