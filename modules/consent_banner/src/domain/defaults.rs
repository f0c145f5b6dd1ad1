//! Built-in option defaults
//!
//! Seeded into the option store on first use and merged under stored
//! options on every read, so the renderer always sees a complete map.

use crate::contract::{SettingValue, SettingsMap};

const TEXT_DEFAULTS: &[(&str, &str)] = &[
    ("banner_title", "\u{1f36a} We use cookies"),
    (
        "banner_text",
        "We use cookies to improve your experience on our site. By continuing to browse, you agree to our use of cookies.",
    ),
    ("accept_text", "Accept All Cookies"),
    ("decline_text", "Decline"),
    ("banner_position", "bottom"),
    ("card_text_align", "center"),
    ("font_family", "inherit"),
    ("banner_bg_color", "#ffffff"),
    ("border_color", "#E1195B"),
    ("title_color", "#222222"),
    ("text_color", "#333333"),
    ("link_color", "#E1195B"),
    ("link_hover_color", "#48144A"),
    ("accept_bg_color", "#E1195B"),
    ("accept_text_color", "#ffffff"),
    ("accept_hover_bg", "#48144A"),
    ("accept_hover_text", "#ffffff"),
    ("decline_bg_color", "#f5f5f5"),
    ("decline_text_color", "#666666"),
    ("decline_hover_bg", "#e0e0e0"),
    ("decline_hover_text", "#333333"),
    ("content_direction_desktop", "row"),
    ("content_direction_tablet", "row"),
    ("content_direction_mobile", "column"),
    ("button_layout_desktop", "horizontal"),
    ("button_layout_tablet", "horizontal"),
    ("button_layout_mobile", "vertical"),
    ("display_mode", "all_pages"),
];

const NUMBER_DEFAULTS: &[(&str, u32)] = &[
    ("cookie_duration", 365),
    ("border_width", 3),
    ("card_max_width", 400),
    ("card_border_radius", 12),
    ("card_padding_v", 20),
    ("card_padding_h", 20),
    ("card_button_gap", 10),
    ("button_font_weight", 600),
    ("title_size", 16),
    ("title_size_desktop", 16),
    ("title_size_tablet", 15),
    ("title_size_mobile", 14),
    ("text_size", 14),
    ("text_size_desktop", 14),
    ("text_size_tablet", 13),
    ("text_size_mobile", 12),
    ("button_radius", 5),
    ("button_radius_desktop", 5),
    ("button_radius_tablet", 5),
    ("button_radius_mobile", 5),
    ("button_size", 14),
    ("button_size_desktop", 14),
    ("button_size_tablet", 13),
    ("button_size_mobile", 13),
    ("button_padding_v", 12),
    ("button_padding_v_desktop", 12),
    ("button_padding_v_tablet", 10),
    ("button_padding_v_mobile", 12),
    ("button_padding_h", 24),
    ("button_padding_h_desktop", 24),
    ("button_padding_h_tablet", 20),
    ("button_padding_h_mobile", 20),
    ("banner_padding_v", 20),
    ("banner_padding_v_desktop", 20),
    ("banner_padding_v_tablet", 18),
    ("banner_padding_v_mobile", 15),
];

/// The complete default options map.
pub fn default_settings() -> SettingsMap {
    let mut map = SettingsMap::new();
    for (key, value) in TEXT_DEFAULTS {
        map.insert((*key).to_string(), SettingValue::Text((*value).to_string()));
    }
    for (key, value) in NUMBER_DEFAULTS {
        map.insert((*key).to_string(), SettingValue::Number(*value));
    }
    map.insert("show_decline".to_string(), SettingValue::Flag(true));
    map.insert("box_shadow".to_string(), SettingValue::Flag(true));
    map.insert("selected_pages".to_string(), SettingValue::Pages(Vec::new()));
    map.insert("excluded_pages".to_string(), SettingValue::Pages(Vec::new()));
    map
}

/// Stored options layered over the defaults.
pub fn merge_over_defaults(stored: &SettingsMap) -> SettingsMap {
    let mut merged = default_settings();
    for (key, value) in stored {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
