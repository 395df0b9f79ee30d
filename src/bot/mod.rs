//! Discord gateway connection and event handling.
//!
//! The bot is the only entry point of the application. Events are delegated to the
//! modules in [`handler`], which call into the services and never propagate errors
//! back to serenity.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild, role and channel cache used for permission checks
//! - `GUILD_MESSAGES` - Prefix commands and deleted messages
//! - `MESSAGE_CONTENT` - Reading command text (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Pin requests
//! - `GUILD_VOICE_STATES` - Finding the voice channel of `play` and voice playback
//! - `GUILD_MEMBERS` - Member roles for component actions (privileged intent)
//!
//! Both privileged intents must be enabled in the Discord Developer Portal.

use std::sync::Arc;

use serenity::{gateway::ShardManager, prelude::TypeMapKey};

pub mod gateway;
pub mod handler;
pub mod start;

/// Shard manager stored in the client's data, read by `ping` for gateway latency.
pub struct ShardManagerKey;

impl TypeMapKey for ShardManagerKey {
    type Value = Arc<ShardManager>;
}
