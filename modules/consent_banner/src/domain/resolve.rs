//! Option resolution with per-device fallback
//!
//! Every device-scoped lookup walks a three-level chain: the device
//! variant (`key_device`), the base key, then a hardcoded default. The
//! first present, non-empty value wins. Resolution is total - there is
//! no failure mode.

use crate::contract::{Device, SettingValue, SettingsMap};

/// Resolve a device-scoped option.
///
/// Tries `key_<device>`, then `key`, then `default`.
pub fn resolve<'a>(
    settings: &'a SettingsMap,
    key: &str,
    device: Device,
    default: &'a SettingValue,
) -> &'a SettingValue {
    let device_key = format!("{}_{}", key, device.suffix());
    if let Some(v) = settings.get(&device_key) {
        if !v.is_empty() {
            return v;
        }
    }
    if let Some(v) = settings.get(key) {
        if !v.is_empty() {
            return v;
        }
    }
    default
}

/// A responsive numeric property: one base key plus three device
/// variants, with a per-device hardcoded default.
///
/// Keeping the key and defaults together avoids ad-hoc key-string
/// concatenation at call sites; the stylesheet builder iterates these
/// as a lookup table keyed by (property, breakpoint).
#[derive(Debug, Clone, Copy)]
pub struct Responsive {
    key: &'static str,
    /// Defaults in [desktop, tablet, mobile] order
    defaults: [u32; 3],
}

impl Responsive {
    pub const fn new(key: &'static str, defaults: [u32; 3]) -> Self {
        Self { key, defaults }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Resolved value for a device breakpoint
    pub fn value(&self, settings: &SettingsMap, device: Device) -> u32 {
        let default = self.defaults[match device {
            Device::Desktop => 0,
            Device::Tablet => 1,
            Device::Mobile => 2,
        }];
        number_at(settings, self.key, device, default)
    }
}

/// The eight responsive numeric families the banner styles from.
pub const BORDER_WIDTH: Responsive = Responsive::new("border_width", [3, 3, 3]);
pub const TITLE_SIZE: Responsive = Responsive::new("title_size", [16, 15, 14]);
pub const TEXT_SIZE: Responsive = Responsive::new("text_size", [14, 13, 12]);
pub const BUTTON_RADIUS: Responsive = Responsive::new("button_radius", [5, 5, 5]);
pub const BUTTON_SIZE: Responsive = Responsive::new("button_size", [14, 13, 13]);
pub const BUTTON_PADDING_V: Responsive = Responsive::new("button_padding_v", [12, 10, 12]);
pub const BUTTON_PADDING_H: Responsive = Responsive::new("button_padding_h", [24, 20, 20]);
pub const BANNER_PADDING_V: Responsive = Responsive::new("banner_padding_v", [20, 18, 15]);

/// Device-scoped numeric lookup through the fallback chain.
pub fn number_at(settings: &SettingsMap, key: &str, device: Device, default: u32) -> u32 {
    let fallback = SettingValue::Number(default);
    resolve(settings, key, device, &fallback)
        .as_number()
        .unwrap_or(default)
}

/// Unscoped text lookup with default.
pub fn text_or<'a>(settings: &'a SettingsMap, key: &str, default: &'a str) -> &'a str {
    match settings.get(key) {
        Some(v) if !v.is_empty() => v.as_text().unwrap_or(default),
        _ => default,
    }
}

/// Unscoped numeric lookup with default.
pub fn number_or(settings: &SettingsMap, key: &str, default: u32) -> u32 {
    settings
        .get(key)
        .and_then(SettingValue::as_number)
        .unwrap_or(default)
}

/// Unscoped flag lookup with default.
pub fn flag_or(settings: &SettingsMap, key: &str, default: bool) -> bool {
    settings
        .get(key)
        .and_then(SettingValue::as_flag)
        .unwrap_or(default)
}

/// Unscoped page-list lookup, empty when absent.
pub fn pages_or<'a>(settings: &'a SettingsMap, key: &str) -> &'a [u64] {
    settings
        .get(key)
        .and_then(SettingValue::as_pages)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, SettingValue)]) -> SettingsMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn device_variant_wins_over_base() {
        let settings = map(&[
            ("title_size", SettingValue::Number(16)),
            ("title_size_mobile", SettingValue::Number(12)),
        ]);
        assert_eq!(TITLE_SIZE.value(&settings, Device::Mobile), 12);
        assert_eq!(TITLE_SIZE.value(&settings, Device::Desktop), 16);
    }

    #[test]
    fn base_value_covers_missing_variants() {
        let settings = map(&[("text_size", SettingValue::Number(18))]);
        for device in Device::ALL {
            assert_eq!(TEXT_SIZE.value(&settings, device), 18);
        }
    }

    #[test]
    fn hardcoded_default_closes_the_chain() {
        let settings = SettingsMap::new();
        assert_eq!(BUTTON_PADDING_V.value(&settings, Device::Desktop), 12);
        assert_eq!(BUTTON_PADDING_V.value(&settings, Device::Tablet), 10);
        assert_eq!(BUTTON_PADDING_V.value(&settings, Device::Mobile), 12);
    }

    #[test]
    fn empty_text_behaves_like_absent() {
        let settings = map(&[
            ("button_size_tablet", SettingValue::Text(String::new())),
            ("button_size", SettingValue::Number(15)),
        ]);
        assert_eq!(BUTTON_SIZE.value(&settings, Device::Tablet), 15);
    }

    #[test]
    fn numeric_text_values_parse() {
        let settings = map(&[("border_width", SettingValue::Text("7".into()))]);
        assert_eq!(BORDER_WIDTH.value(&settings, Device::Desktop), 7);
    }

    #[test]
    fn generic_resolve_returns_first_non_empty() {
        let settings = map(&[("accent", SettingValue::Text("#ff0000".into()))]);
        let default = SettingValue::Text("#000000".into());
        let v = resolve(&settings, "accent", Device::Desktop, &default);
        assert_eq!(v.as_text(), Some("#ff0000"));

        let v = resolve(&settings, "missing", Device::Desktop, &default);
        assert_eq!(v.as_text(), Some("#000000"));
    }
}
