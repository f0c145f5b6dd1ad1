//! Consent Banner Module
//!
//! Configurable cookie-consent banner: per-device option resolution,
//! page display rules, self-contained HTML/CSS/JS fragment rendering and
//! a whitelist settings sanitizer.

// Public exports
pub mod contract;
pub use contract::{
    client::BannerApi, error::ConsentError, BannerPosition, ConsentState, Device, DisplayMode,
    Page, PageView, SettingValue, SettingsMap,
};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
#[doc(hidden)]
pub mod render;

// Convenience re-exports for hosts wiring the module in
pub use api::native::NativeClient;
pub use api::rest::routes::register_routes;
pub use config::Config;
pub use domain::Service;
