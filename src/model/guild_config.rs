//! Per-guild settings and the typed keys used to edit them.

use std::fmt;

use crate::{
    error::{command::CommandError, AppError},
    util::parse::{parse_bool, parse_channel_id, parse_optional_u64, parse_u64_from_string},
};

/// Settings of one guild. Guilds without a stored row use [`GuildConfig::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    pub guild_id: u64,
    /// Whether pin requests are watched.
    pub check_reactions: bool,
    /// Channel receiving pin requests.
    pub notification_channel_id: Option<u64>,
    /// 📌 reactions needed for a pin request.
    pub minimum_reaction_count: i32,
    /// Channel holding the radio "Now Playing" message.
    pub radio_text_channel_id: Option<u64>,
    pub radio_message_id: Option<u64>,
}

impl GuildConfig {
    /// Default settings for a guild.
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            check_reactions: false,
            notification_channel_id: None,
            minimum_reaction_count: 0,
            radio_text_channel_id: None,
            radio_message_id: None,
        }
    }

    /// Converts an entity model to the guild config domain model
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored snowflake is not a u64
    pub fn from_entity(entity: entity::guild_config::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            check_reactions: entity.check_reactions,
            notification_channel_id: parse_optional_u64(entity.notification_channel_id)?,
            minimum_reaction_count: entity.minimum_reaction_count,
            radio_text_channel_id: parse_optional_u64(entity.radio_text_channel_id)?,
            radio_message_id: parse_optional_u64(entity.radio_message_id)?,
        })
    }

    /// Current value of a key.
    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::CheckReactions => ConfigValue::Bool(self.check_reactions),
            ConfigKey::NotificationChannelId => ConfigValue::Channel(self.notification_channel_id),
            ConfigKey::MinimumReactionCount => ConfigValue::Int(self.minimum_reaction_count),
            ConfigKey::RadioTextChannelId => ConfigValue::Channel(self.radio_text_channel_id),
            ConfigKey::RadioMessageId => ConfigValue::Id(self.radio_message_id),
        }
    }

    /// Applies a value parsed for `key`. Values of another kind are ignored.
    pub fn apply(&mut self, key: ConfigKey, value: ConfigValue) {
        match (key, value) {
            (ConfigKey::CheckReactions, ConfigValue::Bool(v)) => self.check_reactions = v,
            (ConfigKey::NotificationChannelId, ConfigValue::Channel(v)) => {
                self.notification_channel_id = v
            }
            (ConfigKey::MinimumReactionCount, ConfigValue::Int(v)) => {
                self.minimum_reaction_count = v
            }
            (ConfigKey::RadioTextChannelId, ConfigValue::Channel(v)) => {
                self.radio_text_channel_id = v
            }
            (ConfigKey::RadioMessageId, ConfigValue::Id(v)) => self.radio_message_id = v,
            (key, value) => {
                tracing::warn!("Ignoring {:?} for config key {}", value, key);
            }
        }
    }

    /// Whether pin requests are fully configured.
    pub fn pins_enabled(&self) -> bool {
        self.check_reactions
            && self.notification_channel_id.is_some()
            && self.minimum_reaction_count > 0
    }
}

/// Settings that can be read and changed with the `config` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    CheckReactions,
    NotificationChannelId,
    MinimumReactionCount,
    RadioTextChannelId,
    RadioMessageId,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::CheckReactions,
        ConfigKey::NotificationChannelId,
        ConfigKey::MinimumReactionCount,
        ConfigKey::RadioTextChannelId,
        ConfigKey::RadioMessageId,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::CheckReactions => "check_reactions",
            Self::NotificationChannelId => "notification_channel_id",
            Self::MinimumReactionCount => "minimum_reaction_count",
            Self::RadioTextChannelId => "radio_text_channel_id",
            Self::RadioMessageId => "radio_message_id",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(name))
    }

    /// Describes the value the key expects, for help and error text.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::CheckReactions => "boolean",
            Self::NotificationChannelId | Self::RadioTextChannelId => "channel",
            Self::MinimumReactionCount => "non-negative integer",
            Self::RadioMessageId => "message ID",
        }
    }

    /// Parses text into a value for this key.
    ///
    /// Nullable keys accept `none` or `clear` to unset the value.
    ///
    /// # Returns
    /// - `Ok(ConfigValue)` - Parsed value
    /// - `Err(CommandError::InvalidArgument)` - Text does not fit the key
    pub fn parse_value(&self, raw: &str) -> Result<ConfigValue, CommandError> {
        let invalid = || CommandError::InvalidArgument {
            value: raw.to_string(),
            expected: self.expected(),
        };
        let unset = matches!(raw.to_lowercase().as_str(), "none" | "clear" | "null");

        match self {
            Self::CheckReactions => parse_bool(raw).map(ConfigValue::Bool).ok_or_else(invalid),
            Self::NotificationChannelId | Self::RadioTextChannelId => {
                if unset {
                    return Ok(ConfigValue::Channel(None));
                }
                parse_channel_id(raw)
                    .map(|id| ConfigValue::Channel(Some(id)))
                    .ok_or_else(invalid)
            }
            Self::MinimumReactionCount => raw
                .parse::<i32>()
                .ok()
                .filter(|count| *count >= 0)
                .map(ConfigValue::Int)
                .ok_or_else(invalid),
            Self::RadioMessageId => {
                if unset {
                    return Ok(ConfigValue::Id(None));
                }
                raw.parse::<u64>()
                    .ok()
                    .filter(|id| *id != 0)
                    .map(|id| ConfigValue::Id(Some(id)))
                    .ok_or_else(invalid)
            }
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i32),
    Channel(Option<u64>),
    Id(Option<u64>),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{}", value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Channel(Some(id)) => write!(f, "<#{}>", id),
            Self::Id(Some(id)) => write!(f, "{}", id),
            Self::Channel(None) | Self::Id(None) => f.write_str("not set"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!(ConfigKey::parse("CHECK_REACTIONS"), Some(ConfigKey::CheckReactions));
        assert_eq!(ConfigKey::parse("color"), None);
    }

    #[test]
    fn parses_values_by_kind() {
        assert_eq!(
            ConfigKey::CheckReactions.parse_value("yes"),
            Ok(ConfigValue::Bool(true))
        );
        assert_eq!(
            ConfigKey::NotificationChannelId.parse_value("<#123>"),
            Ok(ConfigValue::Channel(Some(123)))
        );
        assert_eq!(
            ConfigKey::RadioTextChannelId.parse_value("none"),
            Ok(ConfigValue::Channel(None))
        );
        assert_eq!(
            ConfigKey::MinimumReactionCount.parse_value("3"),
            Ok(ConfigValue::Int(3))
        );
        assert!(ConfigKey::MinimumReactionCount.parse_value("-1").is_err());
        assert!(ConfigKey::RadioMessageId.parse_value("abc").is_err());
    }

    #[test]
    fn pins_need_channel_and_count() {
        let mut config = GuildConfig::new(1);
        config.apply(ConfigKey::CheckReactions, ConfigValue::Bool(true));
        assert!(!config.pins_enabled());

        config.apply(ConfigKey::NotificationChannelId, ConfigValue::Channel(Some(5)));
        config.apply(ConfigKey::MinimumReactionCount, ConfigValue::Int(2));
        assert!(config.pins_enabled());
        assert_eq!(config.get(ConfigKey::NotificationChannelId).to_string(), "<#5>");
    }
}
