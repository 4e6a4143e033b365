//! Tolerant deserializers for fields whose JSON type the backend does not pin down.

use chrono::DateTime;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render any JSON value as display text. Null becomes an empty string.
pub fn to_display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(map) => {
            for key in ["name", "address", "email"] {
                if let Some(Value::String(s)) = map.get(key) {
                    return s.clone();
                }
            }
            let lat = map.get("lat").or_else(|| map.get("latitude"));
            let lng = map
                .get("lng")
                .or_else(|| map.get("lon"))
                .or_else(|| map.get("longitude"));
            match (lat, lng) {
                (Some(lat), Some(lng)) => format!("{}, {}", to_display(lat), to_display(lng)),
                _ => value.to_string(),
            }
        }
        Value::Array(_) => value.to_string(),
    }
}

pub fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(to_display).unwrap_or_default())
}

/// Like [`display_string`], but blank values become `None`.
pub fn optional_display<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = display_string(deserializer)?;
    Ok(if text.trim().is_empty() { None } else { Some(text) })
}

/// `primary` unless it is blank, then `fallback`. For fields the backend sends
/// under two names (`id`/`_id`, `time`/`createdAt`).
pub fn prefer(primary: String, fallback: String) -> String {
    if primary.trim().is_empty() { fallback } else { primary }
}

/// Show RFC 3339 timestamps as `YYYY-MM-DD HH:MM`; anything else is returned as-is.
pub fn display_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
