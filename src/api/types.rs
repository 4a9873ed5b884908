// src/api/types.rs
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::IntoParams;

// Password generation query
//
// An empty value (`?length=`) is treated the same as a missing one.
#[derive(Serialize, Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Number of characters to generate (default: 16)
    #[serde(default, deserialize_with = "empty_as_none_i64")]
    pub length: Option<i64>,
    /// Draw from the whole printable ASCII range `!`..`~` (default: false).
    /// Accepts true/false, on/off, yes/no and 1/0 in any case.
    #[serde(rename = "hasSymbol", default, deserialize_with = "empty_as_none_bool")]
    pub has_symbol: Option<bool>,
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn empty_as_none_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match non_empty(deserializer)? {
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid length '{}': {}", s, e))),
        None => Ok(None),
    }
}

fn empty_as_none_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match non_empty(deserializer)? {
        Some(s) => parse_flag(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid boolean value '{}'", s))),
        None => Ok(None),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
