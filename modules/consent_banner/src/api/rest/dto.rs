//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Banner DTOs =====

/// Query parameters for the banner endpoint
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BannerQuery {
    /// Identifier of the page being viewed
    #[serde(default)]
    pub page_id: u64,

    /// Whether the viewed page is the site homepage
    #[serde(default)]
    pub homepage: bool,
}

// ===== Settings DTOs =====

/// Full banner settings document keyed by option name
///
/// Values are strings, numbers, booleans or integer arrays depending on
/// the option family.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SettingsDocument {
    /// Option name to value
    #[schema(value_type = Object)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

// ===== Page DTOs =====

/// Page entry for the admin page picker
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageDto {
    /// Page identifier
    pub id: u64,

    /// Page title
    #[schema(example = "Privacy Policy")]
    pub title: String,
}

/// List of selectable pages
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PagesListResponse {
    /// List of pages
    pub items: Vec<PageDto>,

    /// Total count
    pub total: usize,
}

// Note: Conversion implementations live in mapper.rs per module guidelines
