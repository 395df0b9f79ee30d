use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional stored snowflake.
///
/// # Returns
/// - `Ok(None)` - No value stored
/// - `Ok(Some(u64))` - Successfully parsed value
/// - `Err(AppError::InternalErr(ParseStringId))` - Stored value is not a u64
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}

/// Parses a snowflake given either bare or wrapped in a mention such as `<#id>`.
///
/// # Arguments
/// - `value` - The raw text
/// - `prefix` - Mention prefix following `<`, e.g. `#` for channels or `@&` for roles
fn parse_mention(value: &str, prefix: &str) -> Option<u64> {
    let inner = value
        .strip_prefix('<')
        .and_then(|v| v.strip_prefix(prefix))
        .and_then(|v| v.strip_suffix('>'))
        .unwrap_or(value);

    inner.parse::<u64>().ok().filter(|id| *id != 0)
}

/// Parses a channel mention (`<#id>`) or bare channel ID.
pub fn parse_channel_id(value: &str) -> Option<u64> {
    parse_mention(value, "#")
}

/// Parses a role mention (`<@&id>`) or bare role ID.
pub fn parse_role_id(value: &str) -> Option<u64> {
    parse_mention(value, "@&")
}

/// Parses common spellings of a boolean.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "enable" | "enabled" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "disable" | "disabled" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_id() {
        assert_eq!(parse_u64_from_string("123".to_string()).unwrap(), 123);
    }

    #[test]
    fn fails_on_invalid_id() {
        assert!(parse_u64_from_string("abc".to_string()).is_err());
    }

    #[test]
    fn parses_optional_ids() {
        assert_eq!(parse_optional_u64(None).unwrap(), None);
        assert_eq!(parse_optional_u64(Some("42".to_string())).unwrap(), Some(42));
    }

    #[test]
    fn parses_mentions_and_bare_ids() {
        assert_eq!(parse_channel_id("<#123>"), Some(123));
        assert_eq!(parse_channel_id("123"), Some(123));
        assert_eq!(parse_channel_id("<@&123>"), None);
        assert_eq!(parse_role_id("<@&77>"), Some(77));
        assert_eq!(parse_role_id("0"), None);
    }

    #[test]
    fn parses_booleans() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
