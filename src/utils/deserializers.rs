use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// Parses a category or question id sent either as a JSON integer or as a
/// string holding one. The browser client sends both.
pub fn id_from_value(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    match value {
        None | Some(JsonValue::Null) => Ok(None),
        Some(v) => id_from_value(&v)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("Wrong value {v}, can not parse to id"))),
    }
}

pub fn deserialize_optional_difficulty<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match deserialize_optional_id(deserializer)? {
        None => Ok(None),
        Some(v) => i32::try_from(v)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Difficulty {v} is out of range"))),
    }
}

/// Reads a list of ids, keeping only the entries `id_from_value` accepts.
/// A missing or null list is empty; a value that is not a list is an error.
pub fn deserialize_id_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<JsonValue>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .iter()
        .filter_map(id_from_value)
        .collect())
}

// query strings are not typed; anything that is not an integer means page 1
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse().ok()).unwrap_or(1))
}
