use sea_orm::DatabaseConnection;
use serenity::all::{Context, Reaction};

use crate::{config::Config, service::pins};

/// Handles the reaction_add event.
///
/// Runs pin request handling for the reacted message. Reactions by the bot itself
/// are ignored.
///
/// # Arguments
/// - `db` - Database connection for reading the guild configuration
/// - `config` - Application configuration holding the embed color
/// - `ctx` - Discord context for API calls
/// - `reaction` - The added reaction
pub async fn handle_reaction_add(
    db: &DatabaseConnection,
    config: &Config,
    ctx: Context,
    reaction: Reaction,
) {
    let bot_id = ctx.cache.current_user().id;
    if reaction.user_id == Some(bot_id) {
        return;
    }

    match pins::handle_reaction(&ctx.http, db, &reaction, bot_id, config.color).await {
        Ok(true) => tracing::info!(
            "Queued pin request for message {} in channel {}",
            reaction.message_id,
            reaction.channel_id
        ),
        Ok(false) => {}
        Err(e) => tracing::error!(
            "Failed to handle reaction on message {}: {}",
            reaction.message_id,
            e
        ),
    }
}
