use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, EditMessage, GuildId, Http, MessageId};
use serenity::async_trait;
use songbird::{
    events::{Event, EventContext, EventHandler as VoiceEventHandler, TrackEvent},
    input::File,
    tracks::PlayMode,
    Songbird,
};
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    service::{
        guild_config::GuildConfigService,
        music::library::{nothing_playing_embed, MusicLibrary, TrackInfo},
    },
};

/// Which guilds have a radio session running.
///
/// Each session gets a new generation number. Track end handlers hold the generation
/// they were registered for and stop chaining tracks once it is no longer current,
/// which also covers tracks ending because the session was stopped.
#[derive(Debug, Default)]
pub struct RadioState {
    sessions: Mutex<HashMap<GuildId, u64>>,
    generations: AtomicU64,
}

impl RadioState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session, returning its generation, or `None` if one is already running.
    pub async fn start(&self, guild_id: GuildId) -> Option<u64> {
        let mut sessions = self.sessions.lock().await;
        if sessions.contains_key(&guild_id) {
            return None;
        }

        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        sessions.insert(guild_id, generation);
        Some(generation)
    }

    pub async fn is_current(&self, guild_id: GuildId, generation: u64) -> bool {
        self.sessions.lock().await.get(&guild_id) == Some(&generation)
    }

    /// Ends the session of a guild, returning whether one was running.
    pub async fn stop(&self, guild_id: GuildId) -> bool {
        self.sessions.lock().await.remove(&guild_id).is_some()
    }
}

/// Plays the library in a guild's voice channel and keeps the radio message current.
#[derive(Clone)]
pub struct Radio {
    http: Arc<Http>,
    db: DatabaseConnection,
    manager: Arc<Songbird>,
    library: MusicLibrary,
    state: Arc<RadioState>,
    fallback_channel: ChannelId,
}

impl Radio {
    /// # Arguments
    /// - `fallback_channel` - Where to post a radio message when the guild has no radio
    ///   text channel configured, usually the channel the command was used in
    pub fn new(
        http: Arc<Http>,
        db: DatabaseConnection,
        manager: Arc<Songbird>,
        library: MusicLibrary,
        state: Arc<RadioState>,
        fallback_channel: ChannelId,
    ) -> Self {
        Self {
            http,
            db,
            manager,
            library,
            state,
            fallback_channel,
        }
    }

    /// Joins a voice channel and starts playing random tracks
    ///
    /// # Returns
    /// - `Ok(TrackInfo)` - The first track now playing
    /// - `Err(AppError::BadRequest)` - The radio already plays in this guild
    /// - `Err(AppError::VoiceErr)` - Joining the channel failed
    /// - `Err(AppError)` - The library could not provide a track
    pub async fn play(&self, guild_id: GuildId, voice_channel: ChannelId) -> Result<TrackInfo, AppError> {
        let Some(generation) = self.state.start(guild_id).await else {
            return Err(AppError::BadRequest(
                "The radio is already playing in this server".to_string(),
            ));
        };

        if let Err(e) = self.manager.join(guild_id, voice_channel).await {
            self.state.stop(guild_id).await;
            return Err(AppError::VoiceErr(e.to_string()));
        }

        tracing::info!("Joined voice channel {} in guild {}", voice_channel, guild_id);

        match self.play_next(guild_id, generation).await {
            Ok(track) => Ok(track),
            Err(e) => {
                self.state.stop(guild_id).await;
                let _ = self.manager.remove(guild_id).await;
                Err(e)
            }
        }
    }

    /// Stops playing, leaves the voice channel and resets the radio message
    ///
    /// # Returns
    /// - `Ok(true)` - The radio was playing and has stopped
    /// - `Ok(false)` - Nothing was playing
    pub async fn stop(&self, guild_id: GuildId, reason: Option<&str>) -> Result<bool, AppError> {
        let was_playing = self.state.stop(guild_id).await;

        if self.manager.get(guild_id).is_some() {
            self.manager
                .remove(guild_id)
                .await
                .map_err(|e| AppError::VoiceErr(e.to_string()))?;
        } else if !was_playing {
            return Ok(false);
        }

        tracing::info!("Stopped the radio in guild {}", guild_id);
        self.update_radio_message(guild_id, nothing_playing_embed(reason))
            .await?;

        Ok(true)
    }

    async fn play_next(&self, guild_id: GuildId, generation: u64) -> Result<TrackInfo, AppError> {
        let track = self.library.next_track().await?;

        let call = self
            .manager
            .get(guild_id)
            .ok_or_else(|| AppError::VoiceErr("Not connected to a voice channel".to_string()))?;

        {
            let mut handler = call.lock().await;
            let handle = handler.play_input(File::new(track.file.clone()).into());

            let notifier = TrackEndNotifier {
                radio: self.clone(),
                guild_id,
                generation,
            };
            for event in [TrackEvent::End, TrackEvent::Error] {
                handle
                    .add_event(Event::Track(event), notifier.clone())
                    .map_err(|e| AppError::VoiceErr(e.to_string()))?;
            }
        }

        tracing::debug!("Playing '{}' in guild {}", track.title, guild_id);

        if let Err(e) = self
            .update_radio_message(guild_id, track.now_playing_embed())
            .await
        {
            tracing::error!("Failed to update radio message in guild {}: {}", guild_id, e);
        }

        Ok(track)
    }

    /// Edits the guild's radio message, posting and remembering a new one when missing.
    pub async fn update_radio_message(
        &self,
        guild_id: GuildId,
        embed: CreateEmbed,
    ) -> Result<(), AppError> {
        let config_service = GuildConfigService::new(&self.db);
        let config = config_service.get(guild_id.get()).await?;

        if let (Some(channel_id), Some(message_id)) =
            (config.radio_text_channel_id, config.radio_message_id)
        {
            let edited = ChannelId::new(channel_id)
                .edit_message(
                    &self.http,
                    MessageId::new(message_id),
                    EditMessage::new().embed(embed.clone()),
                )
                .await;

            match edited {
                Ok(_) => return Ok(()),
                Err(e) => tracing::warn!(
                    "Radio message {} in guild {} could not be edited: {}",
                    message_id,
                    guild_id,
                    e
                ),
            }
        }

        let channel_id = config
            .radio_text_channel_id
            .map(ChannelId::new)
            .unwrap_or(self.fallback_channel);

        let message = channel_id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;
        config_service
            .set_radio_message(guild_id.get(), message.id.get())
            .await?;

        tracing::info!(
            "Set missing radio message of guild {} to {}",
            guild_id,
            message.id
        );

        Ok(())
    }
}

#[derive(Clone)]
struct TrackEndNotifier {
    radio: Radio,
    guild_id: GuildId,
    generation: u64,
}

#[async_trait]
impl VoiceEventHandler for TrackEndNotifier {
    async fn act(&self, ctx: &EventContext<'_>) -> Option<Event> {
        if let EventContext::Track(tracks) = ctx {
            for (state, _) in tracks.iter() {
                if let PlayMode::Errored(e) = &state.playing {
                    tracing::error!("Track failed in guild {}: {:?}", self.guild_id, e);
                }
            }
        }

        if !self.radio.state.is_current(self.guild_id, self.generation).await {
            return None;
        }

        if let Err(e) = self.radio.play_next(self.guild_id, self.generation).await {
            tracing::error!("Could not play next track in guild {}: {}", self.guild_id, e);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a guild can run only one radio session at a time.
    ///
    /// Expected: second start refused until the first session stops
    #[tokio::test]
    async fn one_session_per_guild() {
        let state = RadioState::new();
        let guild = GuildId::new(1);

        let first = state.start(guild).await;
        assert!(first.is_some());
        assert!(state.start(guild).await.is_none());
        assert!(state.start(GuildId::new(2)).await.is_some());

        assert!(state.stop(guild).await);
        assert!(!state.stop(guild).await);
        assert!(state.start(guild).await.is_some());
    }

    /// Tests that handlers of a stopped session are no longer current.
    ///
    /// Verifies a restarted session gets a new generation so track end handlers from
    /// the old session stop chaining tracks.
    ///
    /// Expected: only the newest generation is current
    #[tokio::test]
    async fn stopped_sessions_are_not_current() {
        let state = RadioState::new();
        let guild = GuildId::new(1);

        let old = state.start(guild).await.unwrap();
        assert!(state.is_current(guild, old).await);

        state.stop(guild).await;
        assert!(!state.is_current(guild, old).await);

        let new = state.start(guild).await.unwrap();
        assert_ne!(old, new);
        assert!(state.is_current(guild, new).await);
        assert!(!state.is_current(guild, old).await);
    }
}
