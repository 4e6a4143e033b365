//! The admin API is inconsistent about envelopes: a collection may come back as a
//! bare array or wrapped in an object under a resource-specific key.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pull the list out of a collection response body.
///
/// Accepts a bare array, `{ "<key>": [...] }`, `{ "data": [...] }` or
/// `{ "data": { "<key>": [...] } }`. Any other shape yields an empty list.
pub fn extract_list<T: DeserializeOwned>(body: Value, key: &str) -> serde_json::Result<Vec<T>> {
    let items = unwrap_array(body, key, true).unwrap_or_default();
    items.into_iter().map(serde_json::from_value).collect()
}

fn unwrap_array(body: Value, key: &str, descend: bool) -> Option<Vec<Value>> {
    match body {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => {
            if let Some(Value::Array(items)) = map.remove(key) {
                return Some(items);
            }
            match map.remove("data") {
                Some(data) if descend => unwrap_array(data, key, false),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Single objects may also arrive inside a `data` envelope, possibly next to
/// status keys such as `success`. `data` is only taken when it is an object and
/// none of `fields` sit at the top level.
pub fn unwrap_object(body: Value, fields: &[&str]) -> Value {
    match body {
        Value::Object(mut map)
            if map.get("data").is_some_and(Value::is_object)
                && !fields.iter().any(|f| map.contains_key(*f)) =>
        {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
