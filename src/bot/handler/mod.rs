use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, EventHandler, GuildId, Interaction, Message, MessageId, Reaction, Ready,
};
use serenity::async_trait;

use crate::{config::Config, service::music::RadioState};

pub mod interaction;
pub mod message;
pub mod message_delete;
pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub config: Config,
    pub http_client: reqwest::Client,
    pub radio: Arc<RadioState>,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        config: Config,
        http_client: reqwest::Client,
        radio: Arc<RadioState>,
    ) -> Self {
        Self {
            db,
            config,
            http_client,
            radio,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        message_delete::handle_message_delete(&self.db, ctx, channel_id, deleted_message_id, guild_id)
            .await;
    }

    /// Called when several messages are deleted at once
    async fn message_delete_bulk(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        multiple_deleted_messages_ids: Vec<MessageId>,
        guild_id: Option<GuildId>,
    ) {
        message_delete::handle_message_delete_bulk(
            &self.db,
            ctx,
            channel_id,
            multiple_deleted_messages_ids,
            guild_id,
        )
        .await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        reaction::handle_reaction_add(&self.db, &self.config, ctx, reaction).await;
    }

    /// Called for button clicks, menu submissions and other interactions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.db, ctx, interaction).await;
    }
}
