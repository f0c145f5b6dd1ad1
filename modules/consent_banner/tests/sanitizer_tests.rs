//! Sanitizer behavior over full form payloads

use consent_banner::api::rest::dto::SettingsDocument;
use consent_banner::contract::{SettingValue, SettingsMap};
use consent_banner::domain::defaults::default_settings;
use consent_banner::domain::sanitize::sanitize;
use serde_json::json;

fn as_json(settings: SettingsMap) -> serde_json::Map<String, serde_json::Value> {
    SettingsDocument::from(settings).options
}

#[test]
fn sanitizing_the_defaults_keeps_every_key() {
    let defaults = default_settings();
    let clean = sanitize(&as_json(defaults.clone()));

    let mut missing: Vec<&str> = defaults
        .keys()
        .filter(|k| !clean.contains_key(*k))
        .map(String::as_str)
        .collect();
    missing.sort_unstable();
    assert!(missing.is_empty(), "defaults did not survive: {missing:?}");
}

#[test]
fn sanitize_is_idempotent() {
    // Colors normalize to lowercase on the first pass; a second pass over
    // the sanitized output must change nothing.
    let first = sanitize(&as_json(default_settings()));
    let second = sanitize(&as_json(first.clone()));
    assert_eq!(first, second);
}

#[test]
fn full_hostile_payload_is_neutralized() {
    let payload = json!({
        "banner_title": "<img src=x onerror=alert(1)>Cookies?",
        "banner_text": "line one\n<script>bad()</script>line two",
        "banner_bg_color": "url(javascript:alert(1))",
        "accept_bg_color": "#FF0000",
        "cookie_duration": "-30",
        "button_size_mobile": "18",
        "display_mode": "specific_pages",
        "selected_pages": ["5", 2, {"id": 9}],
        "show_decline": "on",
        "drop_tables": "1; DROP TABLE options",
    });
    let clean = sanitize(payload.as_object().unwrap());

    assert_eq!(
        clean.get("banner_title"),
        Some(&SettingValue::Text("Cookies?".to_string()))
    );
    assert_eq!(
        clean.get("banner_text"),
        Some(&SettingValue::Text("line one\nbad()line two".to_string()))
    );
    assert!(!clean.contains_key("banner_bg_color"));
    assert_eq!(
        clean.get("accept_bg_color"),
        Some(&SettingValue::Text("#ff0000".to_string()))
    );
    assert_eq!(
        clean.get("cookie_duration"),
        Some(&SettingValue::Number(30))
    );
    assert_eq!(
        clean.get("button_size_mobile"),
        Some(&SettingValue::Number(18))
    );
    assert_eq!(
        clean.get("display_mode"),
        Some(&SettingValue::Text("specific_pages".to_string()))
    );
    assert_eq!(
        clean.get("selected_pages"),
        Some(&SettingValue::Pages(vec![5, 2]))
    );
    assert_eq!(clean.get("show_decline"), Some(&SettingValue::Flag(true)));
    assert!(!clean.contains_key("drop_tables"));
}
