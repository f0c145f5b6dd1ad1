//! Conversions between the options map and its persisted JSON form

use crate::contract::{SettingValue, SettingsMap};
use serde_json::Value;

/// Encode an options map as a JSON object for persistence.
pub fn map_to_json(options: &SettingsMap) -> Value {
    let mut object = serde_json::Map::with_capacity(options.len());
    for (key, value) in options {
        let encoded = match value {
            SettingValue::Text(s) => Value::String(s.clone()),
            SettingValue::Number(n) => Value::Number((*n).into()),
            SettingValue::Flag(b) => Value::Bool(*b),
            SettingValue::Pages(ids) => {
                Value::Array(ids.iter().map(|id| Value::Number((*id).into())).collect())
            }
        };
        object.insert(key.clone(), encoded);
    }
    Value::Object(object)
}

/// Decode a persisted JSON object back into an options map.
///
/// Lenient by design: entries with shapes this module never writes are
/// skipped rather than failing the whole document.
pub fn json_to_map(value: &Value) -> SettingsMap {
    let mut options = SettingsMap::new();
    let Some(object) = value.as_object() else {
        return options;
    };
    for (key, value) in object {
        let decoded = match value {
            Value::String(s) => SettingValue::Text(s.clone()),
            Value::Bool(b) => SettingValue::Flag(*b),
            Value::Number(n) => match n.as_u64() {
                Some(u) if u <= u32::MAX as u64 => SettingValue::Number(u as u32),
                _ => continue,
            },
            Value::Array(items) => SettingValue::Pages(
                items.iter().filter_map(Value::as_u64).collect(),
            ),
            _ => continue,
        };
        options.insert(key.clone(), decoded);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_every_value_shape() {
        let mut options = SettingsMap::new();
        options.insert("banner_title".into(), SettingValue::Text("Hi".into()));
        options.insert("title_size".into(), SettingValue::Number(16));
        options.insert("show_decline".into(), SettingValue::Flag(false));
        options.insert("selected_pages".into(), SettingValue::Pages(vec![3, 9]));

        assert_eq!(json_to_map(&map_to_json(&options)), options);
    }

    #[test]
    fn foreign_shapes_are_skipped() {
        let decoded = json_to_map(&json!({
            "banner_title": "ok",
            "nested": {"x": 1},
            "negative": -5,
            "null": null,
        }));
        assert_eq!(decoded.len(), 1);
        assert!(decoded.contains_key("banner_title"));
    }
}
