use serenity::all::{ActivityData, Context, Ready};

use crate::config::Config;

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connected account and sets the configured custom status.
///
/// # Arguments
/// - `config` - Application configuration holding the activity text
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom(config.activity.clone())));
}
