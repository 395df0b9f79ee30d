use sea_orm::DatabaseConnection;

use crate::{
    data::guild_config::GuildConfigRepository,
    error::{command::CommandError, AppError},
    model::guild_config::{ConfigKey, ConfigValue, GuildConfig},
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Settings of a guild, with defaults for guilds that never changed any.
    pub async fn get(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        GuildConfigRepository::new(self.db).get(guild_id).await
    }

    /// Reads one setting by its name
    ///
    /// # Returns
    /// - `Ok(ConfigValue)` - Current value
    /// - `Err(AppError::CommandErr)` - Unknown key
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_value(&self, guild_id: u64, key: &str) -> Result<(ConfigKey, ConfigValue), AppError> {
        let key = parse_key(key)?;
        let config = self.get(guild_id).await?;

        Ok((key, config.get(key)))
    }

    /// Changes one setting from its text form
    ///
    /// # Arguments
    /// - `guild_id` - Guild to change
    /// - `key` - Setting name, case insensitive
    /// - `raw` - Value as typed by the moderator
    ///
    /// # Returns
    /// - `Ok((ConfigKey, ConfigValue))` - The key and the value now stored
    /// - `Err(AppError::CommandErr)` - Unknown key or value of the wrong kind
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn set_value(
        &self,
        guild_id: u64,
        key: &str,
        raw: &str,
    ) -> Result<(ConfigKey, ConfigValue), AppError> {
        let key = parse_key(key)?;
        let value = key.parse_value(raw)?;

        let config = GuildConfigRepository::new(self.db)
            .set(guild_id, key, value)
            .await?;

        tracing::info!("Set {} to {} in guild {}", key, value, guild_id);

        Ok((key, config.get(key)))
    }

    /// Remembers the message showing the radio status.
    pub async fn set_radio_message(&self, guild_id: u64, message_id: u64) -> Result<(), AppError> {
        GuildConfigRepository::new(self.db)
            .set(
                guild_id,
                ConfigKey::RadioMessageId,
                ConfigValue::Id(Some(message_id)),
            )
            .await?;

        Ok(())
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CommandError> {
    ConfigKey::parse(key).ok_or_else(|| CommandError::InvalidArgument {
        value: key.to_string(),
        expected: "config key",
    })
}
