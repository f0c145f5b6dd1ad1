//! Native client trait for host-environment integration
//!
//! This trait defines the API a host embeds to drive the banner.
//! NO HTTP - direct function calls for performance.

use super::{
    error::ConsentError,
    model::{ConsentState, Page, PageView, SettingsMap},
};
use async_trait::async_trait;

/// Consent banner API for in-process callers
#[async_trait]
pub trait BannerApi: Send + Sync {
    /// Render the banner fragment for a page view.
    ///
    /// Returns `None` when the visitor already made a consent decision or
    /// the configured display rules exclude the page.
    async fn render_banner(
        &self,
        page: PageView,
        consent: ConsentState,
    ) -> Result<Option<String>, ConsentError>;

    /// Current settings merged over the built-in defaults
    async fn current_settings(&self) -> Result<SettingsMap, ConsentError>;

    /// Sanitize and persist an admin form payload, returning the stored map
    async fn save_settings(
        &self,
        raw: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<SettingsMap, ConsentError>;

    /// Pages available to the admin page picker
    async fn list_pages(&self) -> Result<Vec<Page>, ConsentError>;
}
