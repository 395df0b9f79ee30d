//! Guild config factory for creating test guild settings rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating guild settings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let config = GuildConfigFactory::new(&db)
///     .guild_id("1")
///     .pins("55", 3)
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    check_reactions: bool,
    notification_channel_id: Option<String>,
    minimum_reaction_count: i32,
    radio_text_channel_id: Option<String>,
    radio_message_id: Option<String>,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with a unique guild and default settings.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: (1000 + next_id()).to_string(),
            check_reactions: false,
            notification_channel_id: None,
            minimum_reaction_count: 0,
            radio_text_channel_id: None,
            radio_message_id: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Enables pin requests sent to `channel_id` after `minimum` reactions.
    pub fn pins(mut self, channel_id: impl Into<String>, minimum: i32) -> Self {
        self.check_reactions = true;
        self.notification_channel_id = Some(channel_id.into());
        self.minimum_reaction_count = minimum;
        self
    }

    /// Sets the radio channel and message.
    pub fn radio(mut self, channel_id: impl Into<String>, message_id: Option<String>) -> Self {
        self.radio_text_channel_id = Some(channel_id.into());
        self.radio_message_id = message_id;
        self
    }

    /// Builds and inserts the settings row into the database.
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            check_reactions: ActiveValue::Set(self.check_reactions),
            notification_channel_id: ActiveValue::Set(self.notification_channel_id),
            minimum_reaction_count: ActiveValue::Set(self.minimum_reaction_count),
            radio_text_channel_id: ActiveValue::Set(self.radio_text_channel_id),
            radio_message_id: ActiveValue::Set(self.radio_message_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates guild settings with default values.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
