//! Contract layer - public API of the consent banner module
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::BannerApi;
pub use error::ConsentError;
pub use model::{
    BannerPosition, ButtonLayout, ConsentState, ContentDirection, Device, DisplayMode, Page,
    PageView, SettingValue, SettingsMap, TextAlign,
};
