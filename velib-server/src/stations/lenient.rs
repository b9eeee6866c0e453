//! Forgiving field decoders for provider rows.
//!
//! The open-data API is loosely typed: counts sometimes arrive as strings,
//! flags as `"OUI"`/`"NON"`, and fields go missing. Each decoder maps anything
//! it cannot interpret to a neutral value instead of failing the row.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::GeoPoint;

/// Non-negative integer that fits in `u32`; anything else becomes 0.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0, count_from_value))
}

/// Boolean flag; unknown encodings become `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(value.as_ref().is_some_and(flag_from_value))
}

/// Free text; numbers are rendered, anything else becomes empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// `{lat, lon}` object; a malformed one becomes `None`.
pub fn location<'de, D>(deserializer: D) -> Result<Option<GeoPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn count_from_value(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.and_then(|n| u32::try_from(n).ok()).unwrap_or(0)
}

fn flag_from_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "oui" | "true" | "yes" | "1"
        ),
        _ => false,
    }
}
