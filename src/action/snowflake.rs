//! Serde helpers accepting Discord IDs written either as JSON strings or numbers.
//!
//! Discord itself serializes snowflakes as strings, but hand-written action documents
//! frequently use bare numbers. Both are accepted.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

/// Deserializes any unsigned integer written as a number or a numeric string.
pub fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(value) => Ok(value),
        RawId::Text(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|e| de::Error::custom(format!("invalid integer '{}': {}", text, e))),
    }
}

/// Deserializes a snowflake ID, rejecting zero.
pub fn deserialize_snowflake<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_u64(deserializer)?;
    if value == 0 {
        return Err(de::Error::custom("snowflake IDs cannot be 0"));
    }
    Ok(value)
}
