use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    error::AppError,
    model::guild_config::{ConfigKey, ConfigValue, GuildConfig},
};

/// Repository for per-guild settings.
pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the stored settings of a guild
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - The guild has stored settings
    /// - `Ok(None)` - Nothing stored yet
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find(&self, guild_id: u64) -> Result<Option<GuildConfig>, AppError> {
        entity::prelude::GuildConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(GuildConfig::from_entity)
            .transpose()
    }

    /// Gets the settings of a guild, falling back to the defaults.
    pub async fn get(&self, guild_id: u64) -> Result<GuildConfig, AppError> {
        Ok(self
            .find(guild_id)
            .await?
            .unwrap_or_else(|| GuildConfig::new(guild_id)))
    }

    /// Sets a single key, creating the guild's row when missing
    ///
    /// # Arguments
    /// - `guild_id` - Guild to update
    /// - `key` - Setting to change
    /// - `value` - Parsed value for the key
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Settings after the change
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn set(
        &self,
        guild_id: u64,
        key: ConfigKey,
        value: ConfigValue,
    ) -> Result<GuildConfig, AppError> {
        let existing = self.find(guild_id).await?;
        let is_new = existing.is_none();

        let mut config = existing.unwrap_or_else(|| GuildConfig::new(guild_id));
        config.apply(key, value);

        let active = entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            check_reactions: ActiveValue::Set(config.check_reactions),
            notification_channel_id: ActiveValue::Set(
                config.notification_channel_id.map(|id| id.to_string()),
            ),
            minimum_reaction_count: ActiveValue::Set(config.minimum_reaction_count),
            radio_text_channel_id: ActiveValue::Set(
                config.radio_text_channel_id.map(|id| id.to_string()),
            ),
            radio_message_id: ActiveValue::Set(config.radio_message_id.map(|id| id.to_string())),
        };

        let model = if is_new {
            active.insert(self.db).await?
        } else {
            active.update(self.db).await?
        };

        GuildConfig::from_entity(model)
    }
}
