use std::time::Instant;

use serde::Serialize;
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, EditMessage};

use crate::{
    bot::ShardManagerKey,
    command::{args, args::Args, CommandContext},
    error::AppError,
    service::{
        music::{MusicLibrary, Radio},
        spotify::SpotifyService,
    },
};

/// `ping`, answering with the gateway heartbeat and the time one API call took.
pub async fn ping(cx: &CommandContext<'_>) -> Result<(), AppError> {
    let started = Instant::now();
    let mut message = cx
        .msg
        .channel_id
        .send_message(&cx.ctx.http, CreateMessage::new().content("Pinging..."))
        .await?;
    let api = started.elapsed();

    let shard_manager = {
        let data = cx.ctx.data.read().await;
        data.get::<ShardManagerKey>().cloned()
    };
    let websocket = match shard_manager {
        Some(manager) => manager
            .runners
            .lock()
            .await
            .get(&cx.ctx.shard_id)
            .and_then(|runner| runner.latency),
        None => None,
    };
    let websocket = websocket
        .map(|latency| format!("{}ms", latency.as_millis()))
        .unwrap_or_else(|| "unknown".to_string());

    message
        .edit(
            &cx.ctx.http,
            EditMessage::new().content("").embed(
                CreateEmbed::new()
                    .color(cx.config.color)
                    .title(":ping_pong: Pong!")
                    .field("Websocket", websocket, true)
                    .field("API", format!("{}ms", api.as_millis()), true),
            ),
        )
        .await?;

    Ok(())
}

/// `play [voice channel]`
pub async fn play(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let voice_channel = match args.optional() {
        Some(token) => ChannelId::new(args::channel(&token)?),
        None => cx
            .guild_id
            .to_guild_cached(&cx.ctx.cache)
            .and_then(|guild| {
                guild
                    .voice_states
                    .get(&cx.msg.author.id)
                    .and_then(|state| state.channel_id)
            })
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Join a voice channel or name one to play in".to_string(),
                )
            })?,
    };

    let track = radio(cx).await?.play(cx.guild_id, voice_channel).await?;

    cx.success(&format!(
        "Playing `{}` in <#{}>",
        track.title, voice_channel
    ))
    .await
}

/// `stop [reason...]`
pub async fn stop(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    let reason = args.rest_text();

    if radio(cx).await?.stop(cx.guild_id, reason.as_deref()).await? {
        cx.success("Stopped the radio").await
    } else {
        Err(AppError::BadRequest("The radio is not playing".to_string()))
    }
}

/// `spotify album <url>`
pub async fn spotify(cx: &CommandContext<'_>, mut args: Args) -> Result<(), AppError> {
    if args.subcommand().as_deref() != Some("album") {
        return cx.group_help("music").await;
    }

    let credentials = cx.config.spotify.as_ref().ok_or_else(|| {
        AppError::BadRequest("Spotify credentials are not configured".to_string())
    })?;
    let album = args.required("album")?;

    let json = SpotifyService::new(cx.http_client, credentials)
        .album(&album)
        .await?;

    cx.send_file(to_indented_json(&json)?, "album.json").await
}

fn to_indented_json<T: Serialize>(value: &T) -> Result<Vec<u8>, AppError> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    value.serialize(&mut serializer)?;

    Ok(bytes)
}

async fn radio(cx: &CommandContext<'_>) -> Result<Radio, AppError> {
    let manager = songbird::get(cx.ctx)
        .await
        .ok_or_else(|| AppError::VoiceErr("Voice client is not registered".to_string()))?;

    Ok(Radio::new(
        cx.ctx.http.clone(),
        cx.db.clone(),
        manager,
        MusicLibrary::new(cx.config.music_root.clone()),
        cx.radio.clone(),
        cx.msg.channel_id,
    ))
}
