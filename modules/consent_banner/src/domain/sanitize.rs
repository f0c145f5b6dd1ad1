//! Admin form sanitization
//!
//! Whitelists known option keys and coerces each to its family's safe
//! shape. Malformed values are replaced with defaults or dropped; unknown
//! keys are dropped silently. The sanitizer never surfaces an error to
//! the caller.

use crate::contract::{
    BannerPosition, ButtonLayout, ContentDirection, Device, DisplayMode, SettingValue,
    SettingsMap, TextAlign,
};
use serde_json::Value;

/// Consent cookie lifetime bounds, in days.
pub const MIN_COOKIE_DURATION: u32 = 1;
pub const MAX_COOKIE_DURATION: u32 = 3650;

/// Longest accepted text option, after trimming.
const MAX_TEXT_LEN: usize = 1000;

/// Single-line text options.
const TEXT_FIELDS: &[&str] = &["banner_title", "accept_text", "decline_text", "font_family"];

/// Hex color options.
const COLOR_FIELDS: &[&str] = &[
    "banner_bg_color",
    "border_color",
    "title_color",
    "text_color",
    "link_color",
    "link_hover_color",
    "accept_bg_color",
    "accept_text_color",
    "accept_hover_bg",
    "accept_hover_text",
    "decline_bg_color",
    "decline_text_color",
    "decline_hover_bg",
    "decline_hover_text",
];

/// Numeric families that carry base plus per-device variants.
const RESPONSIVE_NUMBER_FIELDS: &[&str] = &[
    "border_width",
    "title_size",
    "text_size",
    "button_radius",
    "button_size",
    "button_padding_v",
    "button_padding_h",
    "banner_padding_v",
];

/// Plain numeric options.
const NUMBER_FIELDS: &[&str] = &[
    "card_max_width",
    "card_border_radius",
    "card_padding_v",
    "card_padding_h",
    "card_button_gap",
    "button_font_weight",
];

/// Boolean toggles.
const FLAG_FIELDS: &[&str] = &["show_decline", "box_shadow"];

/// Sanitize a raw admin form payload into a clean options map.
///
/// Output contains only whitelisted keys that arrived with a usable
/// value; callers merge it over the previously stored map, so a dropped
/// invalid value retains its prior setting.
pub fn sanitize(raw: &serde_json::Map<String, Value>) -> SettingsMap {
    let mut clean = SettingsMap::new();

    for field in TEXT_FIELDS {
        if let Some(value) = raw.get(*field) {
            if let Some(text) = coerce_line(value) {
                clean.insert((*field).to_string(), SettingValue::Text(text));
            }
        }
    }

    if let Some(value) = raw.get("banner_text") {
        if let Some(text) = coerce_multiline(value) {
            clean.insert("banner_text".to_string(), SettingValue::Text(text));
        }
    }

    for field in FLAG_FIELDS {
        if let Some(value) = raw.get(*field) {
            clean.insert((*field).to_string(), SettingValue::Flag(coerce_flag(value)));
        }
    }

    if let Some(value) = raw.get("cookie_duration") {
        let days = coerce_uint(value)
            .unwrap_or(365)
            .clamp(MIN_COOKIE_DURATION, MAX_COOKIE_DURATION);
        clean.insert("cookie_duration".to_string(), SettingValue::Number(days));
    }

    for field in COLOR_FIELDS {
        if let Some(value) = raw.get(*field) {
            match value.as_str().and_then(coerce_hex_color) {
                Some(color) => {
                    clean.insert((*field).to_string(), SettingValue::Text(color));
                }
                // Invalid colors are dropped, not stored; the previously
                // saved or default value stays in effect.
                None => tracing::debug!(field, "dropping malformed color value"),
            }
        }
    }

    for field in NUMBER_FIELDS {
        if let Some(n) = raw.get(*field).and_then(coerce_uint) {
            clean.insert((*field).to_string(), SettingValue::Number(n));
        }
    }

    for field in RESPONSIVE_NUMBER_FIELDS {
        if let Some(n) = raw.get(*field).and_then(coerce_uint) {
            clean.insert((*field).to_string(), SettingValue::Number(n));
        }
        for device in Device::ALL {
            let variant = format!("{}_{}", field, device.suffix());
            if let Some(n) = raw.get(&variant).and_then(coerce_uint) {
                clean.insert(variant, SettingValue::Number(n));
            }
        }
    }

    sanitize_enum(raw, &mut clean, "banner_position", |s| {
        BannerPosition::parse(s).unwrap_or_default().as_str()
    });
    sanitize_enum(raw, &mut clean, "card_text_align", |s| {
        TextAlign::parse(s).unwrap_or_default().as_str()
    });
    sanitize_enum(raw, &mut clean, "display_mode", |s| {
        DisplayMode::parse(s).unwrap_or_default().as_str()
    });
    for device in Device::ALL {
        sanitize_enum(
            raw,
            &mut clean,
            &format!("content_direction_{}", device.suffix()),
            |s| ContentDirection::parse(s).unwrap_or_default().as_str(),
        );
        sanitize_enum(
            raw,
            &mut clean,
            &format!("button_layout_{}", device.suffix()),
            |s| ButtonLayout::parse(s).unwrap_or_default().as_str(),
        );
    }

    for field in ["selected_pages", "excluded_pages"] {
        if let Some(value) = raw.get(field) {
            clean.insert(field.to_string(), SettingValue::Pages(coerce_id_list(value)));
        }
    }

    let dropped = raw.len() - raw.keys().filter(|k| clean.contains_key(*k)).count();
    if dropped > 0 {
        tracing::debug!(dropped, "ignored unknown or malformed form keys");
    }

    clean
}

fn sanitize_enum(
    raw: &serde_json::Map<String, Value>,
    clean: &mut SettingsMap,
    field: &str,
    normalize: impl Fn(&str) -> &'static str,
) {
    if let Some(value) = raw.get(field).and_then(Value::as_str) {
        clean.insert(
            field.to_string(),
            SettingValue::Text(normalize(value).to_string()),
        );
    }
}

/// Strip `<...>` tag spans from user text.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Single-line text: tags stripped, whitespace collapsed, trimmed.
fn coerce_line(value: &Value) -> Option<String> {
    let text = strip_tags(value.as_str()?);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    Some(truncate(collapsed))
}

/// Multi-line text: tags stripped, lines trimmed, newlines preserved.
fn coerce_multiline(value: &Value) -> Option<String> {
    let text = strip_tags(value.as_str()?);
    let joined = text
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    Some(truncate(joined.trim().to_string()))
}

fn truncate(mut s: String) -> String {
    if s.len() > MAX_TEXT_LEN {
        let mut cut = MAX_TEXT_LEN;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
    }
    s
}

/// Validate a `#rgb` or `#rrggbb` hex color, normalizing case.
fn coerce_hex_color(input: &str) -> Option<String> {
    let input = input.trim();
    let digits = input.strip_prefix('#')?;
    if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", digits.to_ascii_lowercase()))
}

/// Non-negative integer coercion: numbers take their absolute value,
/// numeric strings are parsed, everything else is rejected.
fn coerce_uint(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.unsigned_abs().min(u32::MAX as u64) as u32)
            } else {
                n.as_f64()
                    .map(|f| f.abs().trunc().min(u32::MAX as f64) as u32)
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .map(|i| i.unsigned_abs().min(u32::MAX as u64) as u32)
        }
        _ => None,
    }
}

fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().map(|i| i != 0).unwrap_or(false),
        Value::String(s) => matches!(s.as_str(), "1" | "true" | "on" | "yes"),
        _ => false,
    }
}

/// Page-id lists keep only non-negative integer entries.
fn coerce_id_list(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::Number(n) => n.as_u64(),
                    Value::String(s) => s.trim().parse().ok(),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}
