//! Route registration for the consent banner HTTP surface

use super::{dto::*, handlers};
use crate::domain::Service;
use axum::{
    routing::{get, put},
    Extension, Router,
};
use std::sync::Arc;

/// Register all REST routes on the host router
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        // Visitor-facing banner endpoint
        .route("/consent/banner", get(get_banner_handler))
        // Admin settings endpoints
        .route("/consent/settings", get(get_settings_handler))
        .route("/consent/settings", put(put_settings_handler))
        .route("/consent/pages", get(list_pages_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_banner_handler(
    Extension(service): Extension<Arc<Service>>,
    headers: axum::http::HeaderMap,
    query: axum::extract::Query<BannerQuery>,
) -> Result<axum::response::Response, super::error::Problem> {
    handlers::get_banner(service, headers, query).await
}

async fn get_settings_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<axum::Json<SettingsDocument>, super::error::Problem> {
    handlers::get_settings(service).await
}

async fn put_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<serde_json::Value>,
) -> Result<axum::Json<SettingsDocument>, super::error::Problem> {
    handlers::put_settings(service, json).await
}

async fn list_pages_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<axum::Json<PagesListResponse>, super::error::Problem> {
    handlers::list_pages(service).await
}
