use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use songbird::SerenityInit;

use crate::{
    bot::{handler::Handler, ShardManagerKey},
    config::Config,
    error::AppError,
    service::music::RadioState,
};

/// Starts the Discord bot in a blocking manner
///
/// Runs until the gateway connection ends or the process receives Ctrl+C, in which
/// case every shard is shut down first.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: Config, db: DatabaseConnection) -> Result<(), AppError> {
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MEMBERS;

    let token = config.discord_bot_token.clone();
    let handler = Handler::new(db, config, reqwest::Client::new(), Arc::new(RadioState::new()));

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .register_songbird()
        .await?;

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerKey>(client.shard_manager.clone());
    }

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, shutting down");
            shard_manager.shutdown_all().await;
        }
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
