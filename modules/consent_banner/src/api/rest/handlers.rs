//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::{ConsentState, PageView};
use crate::domain::Service;
use axum::{
    extract::Query,
    http::{header::COOKIE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

// ===== Banner Handlers =====

/// Render the banner fragment for the current page view.
///
/// Responds 200 with an HTML fragment when the banner should show and
/// 204 when the visitor already decided or the display rules exclude
/// the page.
pub async fn get_banner(
    service: Arc<Service>,
    headers: HeaderMap,
    Query(query): Query<BannerQuery>,
) -> Result<Response, Problem> {
    let consent = consent_from_headers(&headers, &service.config().cookie_name);
    let page = PageView {
        page_id: query.page_id,
        is_homepage: query.homepage,
    };

    let fragment = service
        .render_banner(page, consent)
        .await
        .map_err(map_domain_error)?;

    Ok(match fragment {
        Some(html) => Html(html).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

// ===== Settings Handlers =====

/// Current settings merged over the built-in defaults
pub async fn get_settings(service: Arc<Service>) -> Result<Json<SettingsDocument>, Problem> {
    let settings = service.settings_view().await.map_err(map_domain_error)?;
    Ok(Json(settings.into()))
}

/// Sanitize and persist an admin form payload
pub async fn put_settings(
    service: Arc<Service>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SettingsDocument>, Problem> {
    let raw = body.as_object().ok_or_else(|| {
        Problem::new(StatusCode::BAD_REQUEST, "Invalid Settings Payload")
            .with_detail("Request body must be a JSON object of option values")
    })?;

    let stored = service.save_settings(raw).await.map_err(map_domain_error)?;
    Ok(Json(stored.into()))
}

// ===== Page Handlers =====

/// List pages for the admin page picker
pub async fn list_pages(service: Arc<Service>) -> Result<Json<PagesListResponse>, Problem> {
    let pages = service.list_pages().await.map_err(map_domain_error)?;

    let items: Vec<PageDto> = pages.into_iter().map(|p| p.into()).collect();
    let total = items.len();

    Ok(Json(PagesListResponse { items, total }))
}

/// Parse the consent choice out of the request's Cookie headers.
///
/// Absent or unreadable cookies count as no decision yet.
fn consent_from_headers(headers: &HeaderMap, cookie_name: &str) -> ConsentState {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == cookie_name {
                    return ConsentState::from_cookie_value(value);
                }
            }
        }
    }
    ConsentState::Unset
}
