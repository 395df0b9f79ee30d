use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PREFIX: &str = ";";
const DEFAULT_COLOR: u32 = 0x1fcdff;
const DEFAULT_ACTIVITY: &str = "in the Dungeon Depths";
const DEFAULT_MUSIC_ROOT: &str = "albums";

/// Credentials for the Spotify Web API client credentials flow.
#[derive(Clone, Debug)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    pub command_prefix: String,
    pub color: u32,
    pub activity: String,

    pub music_root: PathBuf,
    pub spotify: Option<SpotifyCredentials>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let color = match std::env::var("BOT_COLOR") {
            Ok(value) => parse_hex_color(&value).ok_or(ConfigError::InvalidEnvVar {
                name: "BOT_COLOR".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_COLOR,
        };

        let spotify = match (
            std::env::var("SPOTIFY_CLIENT_ID"),
            std::env::var("SPOTIFY_CLIENT_SECRET"),
        ) {
            (Ok(client_id), Ok(client_secret)) => Some(SpotifyCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            command_prefix: std::env::var("COMMAND_PREFIX")
                .unwrap_or_else(|_| DEFAULT_PREFIX.to_string()),
            color,
            activity: std::env::var("BOT_ACTIVITY")
                .unwrap_or_else(|_| DEFAULT_ACTIVITY.to_string()),
            music_root: std::env::var("MUSIC_ROOT")
                .unwrap_or_else(|_| DEFAULT_MUSIC_ROOT.to_string())
                .into(),
            spotify,
        })
    }
}

/// Parses `#rrggbb`, `rrggbb` or `0xrrggbb` into a 24-bit color.
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .unwrap_or(trimmed);

    if digits.len() != 6 {
        return None;
    }

    u32::from_str_radix(digits, 16).ok()
}
