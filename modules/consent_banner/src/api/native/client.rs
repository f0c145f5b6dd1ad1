//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{BannerApi, ConsentError, ConsentState, Page, PageView, SettingsMap};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead,
/// e.g. a host templating layer injecting the banner fragment itself.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl BannerApi for NativeClient {
    async fn render_banner(
        &self,
        page: PageView,
        consent: ConsentState,
    ) -> Result<Option<String>, ConsentError> {
        self.service.render_banner(page, consent).await
    }

    async fn current_settings(&self) -> Result<SettingsMap, ConsentError> {
        self.service.settings_view().await
    }

    async fn save_settings(
        &self,
        raw: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<SettingsMap, ConsentError> {
        self.service.save_settings(raw).await
    }

    async fn list_pages(&self) -> Result<Vec<Page>, ConsentError> {
        self.service.list_pages().await
    }
}
