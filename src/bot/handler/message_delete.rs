use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Context, GuildId, MessageId};

use crate::service::action::ActionService;

/// Handles the message_delete event.
///
/// Detaches every action stored for components of the deleted message.
///
/// # Arguments
/// - `db` - Database connection for deleting the actions
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `channel_id` - Channel the message was deleted from
/// - `message_id` - The deleted message
/// - `guild_id` - Guild of the channel, `None` for direct messages
pub async fn handle_message_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    channel_id: ChannelId,
    message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    if guild_id.is_none() {
        return;
    }

    purge(db, channel_id, &[message_id]).await;
}

/// Handles the message_delete_bulk event sent when a moderator purges a channel.
pub async fn handle_message_delete_bulk(
    db: &DatabaseConnection,
    _ctx: Context,
    channel_id: ChannelId,
    message_ids: Vec<MessageId>,
    guild_id: Option<GuildId>,
) {
    if guild_id.is_none() {
        return;
    }

    purge(db, channel_id, &message_ids).await;
}

async fn purge(db: &DatabaseConnection, channel_id: ChannelId, message_ids: &[MessageId]) {
    let ids: Vec<u64> = message_ids.iter().map(|id| id.get()).collect();

    match ActionService::new(db).purge_messages(&ids).await {
        Ok(0) => {}
        Ok(removed) => tracing::debug!(
            "Removed {} action(s) of {} deleted message(s) in channel {}",
            removed,
            ids.len(),
            channel_id
        ),
        Err(e) => tracing::error!(
            "Failed to remove actions of {} deleted message(s) in channel {}: {}",
            ids.len(),
            channel_id,
            e
        ),
    }
}
