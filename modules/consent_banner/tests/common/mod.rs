//! Common test utilities

use async_trait::async_trait;
use consent_banner::contract::{Page, SettingsMap};
use consent_banner::domain::{BannerEvent, EventPublisher, OptionStore, Service};
use consent_banner::infra::pages::StaticPageDirectory;
use consent_banner::infra::storage::MemoryOptionStore;
use consent_banner::Config;
use parking_lot::Mutex;
use std::sync::Arc;

/// Page set used across test suites: homepage is not in the directory,
/// regular pages are.
pub fn sample_pages() -> Vec<Page> {
    vec![
        Page {
            id: 2,
            title: "About".to_string(),
        },
        Page {
            id: 5,
            title: "Privacy Policy".to_string(),
        },
        Page {
            id: 9,
            title: "Contact".to_string(),
        },
    ]
}

/// Event publisher that records published events for assertions
#[derive(Clone, Default)]
pub struct CapturingEventPublisher {
    events: Arc<Mutex<Vec<BannerEvent>>>,
}

impl CapturingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured(&self) -> Vec<BannerEvent> {
        self.events.lock().clone()
    }
}

#[async_trait]
impl EventPublisher for CapturingEventPublisher {
    async fn publish(&self, event: BannerEvent) -> anyhow::Result<()> {
        self.events.lock().push(event);
        Ok(())
    }
}

/// Option store whose every call fails, for error-path tests
pub struct FailingStore;

#[async_trait]
impl OptionStore for FailingStore {
    async fn get(&self, _key: &str) -> anyhow::Result<Option<SettingsMap>> {
        anyhow::bail!("store offline")
    }

    async fn set(&self, _key: &str, _options: &SettingsMap) -> anyhow::Result<bool> {
        anyhow::bail!("store offline")
    }
}

/// Service over an in-memory store, default config and the sample pages
pub fn test_service() -> (Arc<Service>, MemoryOptionStore, CapturingEventPublisher) {
    let store = MemoryOptionStore::new();
    let events = CapturingEventPublisher::new();
    let service = Service::new(
        Arc::new(store.clone()),
        Arc::new(StaticPageDirectory::new(sample_pages())),
        Arc::new(events.clone()),
        Config::default(),
    );
    (Arc::new(service), store, events)
}
