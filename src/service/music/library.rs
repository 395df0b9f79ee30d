//! On-disk music library.
//!
//! The library root holds an `index.json` listing album folders:
//!
//! ```json
//! [{ "path": "creeping_winter", "name": "Creeping Winter", "color": [108, 175, 220] }]
//! ```
//!
//! Each folder holds the album as returned by Spotify's album endpoint (`album.json`)
//! and one `NN_<track name>.mp3` file per track.

use std::path::{Path, PathBuf};

use rand::seq::IndexedRandom;
use serde::Deserialize;
use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

use crate::error::AppError;

const INDEX_FILE: &str = "index.json";
const ALBUM_FILE: &str = "album.json";
const TRACK_EXTENSION: &str = ".mp3";
/// Length of the `NN_` track number prefix of track files.
const TRACK_PREFIX_LEN: usize = 3;

const SPOTIFY_EMOJI: &str = "<:Spotify:869112865615937576>";
const NOT_PLAYING_COLOR: u32 = 0xa2a2a2;
const NOT_PLAYING_THUMBNAIL: &str =
    "https://cdn.discordapp.com/attachments/728166911686344755/866689668434100264/Not_Playing.png";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlbumIndexEntry {
    pub path: String,
    /// Name of the realm the album belongs to, shown next to track titles.
    pub name: String,
    pub color: [u8; 3],
}

#[derive(Debug, Deserialize)]
struct AlbumDocument {
    tracks: TrackPage,
    #[serde(default)]
    external_urls: ExternalUrls,
    #[serde(default)]
    images: Vec<ImageDocument>,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    items: Vec<TrackDocument>,
}

#[derive(Debug, Deserialize)]
struct TrackDocument {
    name: String,
    #[serde(default)]
    artists: Vec<ArtistDocument>,
    #[serde(default)]
    duration_ms: u64,
    #[serde(default)]
    external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
struct ArtistDocument {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageDocument {
    url: String,
}

/// A track picked from the library, ready to be played and announced.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    pub title: String,
    pub artists: Vec<String>,
    pub realm: String,
    pub duration_ms: u64,
    pub file: PathBuf,
    pub track_url: Option<String>,
    pub album_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub color: u32,
}

impl TrackInfo {
    pub fn duration(&self) -> String {
        format_duration(self.duration_ms)
    }

    /// The radio message embed while this track plays.
    pub fn now_playing_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .color(self.color)
            .author(CreateEmbedAuthor::new("Now Playing ♪"))
            .field(
                format!("**{} - {}**", self.title, self.realm),
                format!("Artists: {}", self.artists.join(", ")),
                true,
            )
            .footer(CreateEmbedFooter::new(format!("Length: {}", self.duration())));

        if let Some(thumbnail) = &self.thumbnail_url {
            embed = embed.thumbnail(thumbnail);
        }
        if let Some(url) = &self.track_url {
            embed = embed.field(
                "Track URLS",
                format!("• {} [Spotify]({})", SPOTIFY_EMOJI, url),
                true,
            );
        }

        embed
    }
}

/// The radio message embed while nothing plays.
pub fn nothing_playing_embed(reason: Option<&str>) -> CreateEmbed {
    CreateEmbed::new()
        .color(NOT_PLAYING_COLOR)
        .thumbnail(NOT_PLAYING_THUMBNAIL)
        .field(
            "**Nothing Currently Playing**",
            reason.unwrap_or(
                "Check below to see if there is any news on why the bot is not playing music",
            ),
            true,
        )
}

/// Formats milliseconds as `m:ss`.
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Track name encoded in a `NN_<name>.mp3` file name.
pub fn track_name_from_file(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(TRACK_EXTENSION)?
        .get(TRACK_PREFIX_LEN..)
        .filter(|name| !name.is_empty())
}

#[derive(Debug, Clone)]
pub struct MusicLibrary {
    root: PathBuf,
}

impl MusicLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn load_index(&self) -> Result<Vec<AlbumIndexEntry>, AppError> {
        let bytes = tokio::fs::read(self.root.join(INDEX_FILE)).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Picks a random track of a random album
    ///
    /// # Returns
    /// - `Ok(TrackInfo)` - The track and its audio file
    /// - `Err(AppError::NotFound)` - Empty index, album without tracks, or missing audio file
    /// - `Err(AppError::IoErr)` / `Err(AppError::JsonErr)` - Unreadable library files
    pub async fn next_track(&self) -> Result<TrackInfo, AppError> {
        let index = self.load_index().await?;
        let entry = {
            let mut rng = rand::rng();
            index.choose(&mut rng).cloned()
        }
        .ok_or_else(|| AppError::NotFound("The music library has no albums".to_string()))?;

        let album_dir = self.root.join(&entry.path);
        let bytes = tokio::fs::read(album_dir.join(ALBUM_FILE)).await?;
        let album: AlbumDocument = serde_json::from_slice(&bytes)?;

        let track = {
            let mut rng = rand::rng();
            album.tracks.items.choose(&mut rng)
        }
        .ok_or_else(|| AppError::NotFound(format!("Album `{}` has no tracks", entry.path)))?;

        tracing::debug!("Picked track '{}' from {}", track.name, album_dir.display());

        let file = find_track_file(&album_dir, &track.name).await?;
        let [r, g, b] = entry.color;

        Ok(TrackInfo {
            title: track.name.clone(),
            artists: track.artists.iter().map(|a| a.name.clone()).collect(),
            realm: entry.name,
            duration_ms: track.duration_ms,
            file,
            track_url: track.external_urls.spotify.clone(),
            album_url: album.external_urls.spotify.clone(),
            thumbnail_url: album.images.first().map(|image| image.url.clone()),
            color: u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b),
        })
    }
}

/// Finds the audio file of a track inside an album folder.
pub async fn find_track_file(album_dir: &Path, name: &str) -> Result<PathBuf, AppError> {
    let mut entries = tokio::fs::read_dir(album_dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        let file_name = entry.file_name();
        if track_name_from_file(&file_name.to_string_lossy()) == Some(name) {
            return Ok(entry.path());
        }
    }

    tracing::error!("No track named '{}' in {}", name, album_dir.display());
    Err(AppError::NotFound(format!(
        "Track `{}` not found in {}",
        name,
        album_dir.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_library(root: &Path, track_file: &str) {
        std::fs::write(
            root.join(INDEX_FILE),
            json!([{ "path": "winter", "name": "Creeping Winter", "color": [1, 2, 3] }])
                .to_string(),
        )
        .unwrap();

        let album = root.join("winter");
        std::fs::create_dir(&album).unwrap();
        std::fs::write(
            album.join(ALBUM_FILE),
            json!({
                "external_urls": { "spotify": "https://open.spotify.com/album/a" },
                "images": [{ "url": "https://i.scdn.co/image/cover" }],
                "tracks": { "items": [{
                    "name": "Frosty Fjord",
                    "artists": [{ "name": "Peter Hont" }, { "name": "Jacob Lincke" }],
                    "duration_ms": 185_500,
                    "external_urls": { "spotify": "https://open.spotify.com/track/t" }
                }]}
            })
            .to_string(),
        )
        .unwrap();
        std::fs::write(album.join(track_file), b"").unwrap();
    }

    /// Tests duration formatting.
    ///
    /// Expected: minutes and zero padded seconds
    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65_000), "1:05");
        assert_eq!(format_duration(185_999), "3:05");
        assert_eq!(format_duration(3_600_000), "60:00");
    }

    /// Tests extracting track names from file names.
    ///
    /// Expected: number prefix and extension stripped; other files rejected
    #[test]
    fn reads_track_names_from_files() {
        assert_eq!(track_name_from_file("01_Frosty Fjord.mp3"), Some("Frosty Fjord"));
        assert_eq!(track_name_from_file("album.json"), None);
        assert_eq!(track_name_from_file("01_.mp3"), None);
    }

    /// Tests picking a track from a library on disk.
    ///
    /// Expected: track metadata from album.json and the matching audio file
    #[tokio::test]
    async fn picks_track_from_library() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        write_library(dir.path(), "04_Frosty Fjord.mp3");

        let track = MusicLibrary::new(dir.path()).next_track().await?;

        assert_eq!(track.title, "Frosty Fjord");
        assert_eq!(track.realm, "Creeping Winter");
        assert_eq!(track.artists, vec!["Peter Hont", "Jacob Lincke"]);
        assert_eq!(track.duration(), "3:05");
        assert_eq!(track.color, 0x010203);
        assert_eq!(track.file, dir.path().join("winter").join("04_Frosty Fjord.mp3"));
        assert_eq!(
            track.thumbnail_url.as_deref(),
            Some("https://i.scdn.co/image/cover")
        );

        Ok(())
    }

    /// Tests a track whose audio file is missing.
    ///
    /// Expected: NotFound
    #[tokio::test]
    async fn missing_audio_file_is_not_found() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        write_library(dir.path(), "04_Something Else.mp3");

        let result = MusicLibrary::new(dir.path()).next_track().await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests an empty index.
    ///
    /// Expected: NotFound
    #[tokio::test]
    async fn empty_index_is_not_found() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join(INDEX_FILE), "[]")?;

        let result = MusicLibrary::new(dir.path()).next_track().await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
