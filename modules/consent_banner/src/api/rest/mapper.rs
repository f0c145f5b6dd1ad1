//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains conversions between REST DTOs and the
//! transport-agnostic contract models.

use super::dto::*;
use crate::contract::{self, SettingValue, SettingsMap};
use serde_json::{json, Value};

// ===== Page conversions =====

impl From<contract::Page> for PageDto {
    fn from(page: contract::Page) -> Self {
        Self {
            id: page.id,
            title: page.title,
        }
    }
}

// ===== Settings conversions =====

impl From<SettingsMap> for SettingsDocument {
    fn from(settings: SettingsMap) -> Self {
        let mut options = serde_json::Map::new();
        for (key, value) in settings {
            options.insert(key, setting_value_to_json(value));
        }
        Self { options }
    }
}

fn setting_value_to_json(value: SettingValue) -> Value {
    match value {
        SettingValue::Text(s) => Value::String(s),
        SettingValue::Number(n) => json!(n),
        SettingValue::Flag(b) => Value::Bool(b),
        SettingValue::Pages(ids) => json!(ids),
    }
}
