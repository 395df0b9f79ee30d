use serde::Deserialize;

use crate::{config::SpotifyCredentials, error::AppError};

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const ALBUM_URL: &str = "https://api.spotify.com/v1/albums";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Spotify Web API client using the client credentials flow.
pub struct SpotifyService<'a> {
    pub http_client: &'a reqwest::Client,
    pub credentials: &'a SpotifyCredentials,
}

impl<'a> SpotifyService<'a> {
    pub fn new(http_client: &'a reqwest::Client, credentials: &'a SpotifyCredentials) -> Self {
        Self {
            http_client,
            credentials,
        }
    }

    /// Fetches an album as Spotify returns it
    ///
    /// The result is stored unchanged as an album's `album.json` in the music library.
    ///
    /// # Arguments
    /// - `album` - Album URL, `spotify:album:` URI or bare album ID
    ///
    /// # Returns
    /// - `Ok(Value)` - The album JSON
    /// - `Err(AppError::BadRequest)` - The album reference could not be understood
    /// - `Err(AppError::ReqwestErr)` - Token or album request failed
    pub async fn album(&self, album: &str) -> Result<serde_json::Value, AppError> {
        let album_id = parse_album_id(album).ok_or_else(|| {
            AppError::BadRequest(format!("`{}` is not a Spotify album", album))
        })?;

        let token = self.fetch_token().await?;

        let album = self
            .http_client
            .get(format!("{}/{}", ALBUM_URL, album_id))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        tracing::debug!("Fetched Spotify album {}", album_id);

        Ok(album)
    }

    async fn fetch_token(&self) -> Result<String, AppError> {
        let token = self
            .http_client
            .post(TOKEN_URL)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body("grant_type=client_credentials")
            .send()
            .await?
            .error_for_status()?
            .json::<TokenResponse>()
            .await?;

        Ok(token.access_token)
    }
}

/// Extracts the album ID from an album URL, URI or bare ID.
pub fn parse_album_id(album: &str) -> Option<&str> {
    let album = album.trim();

    let id = if let Some(uri) = album.strip_prefix("spotify:album:") {
        uri
    } else if let Some((_, path)) = album.split_once("open.spotify.com/") {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        // Localized links look like `open.spotify.com/intl-de/album/<id>`
        loop {
            match segments.next()? {
                "album" => break segments.next()?,
                _ => continue,
            }
        }
    } else {
        album
    };

    Some(id).filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the accepted forms of album references.
    ///
    /// Expected: the same ID from a link, a localized link, a URI and a bare ID
    #[test]
    fn parses_album_references() {
        let id = "4aawyAB9vmqN3uQ7FjRGTy";

        assert_eq!(
            parse_album_id(&format!("https://open.spotify.com/album/{}?si=abc", id)),
            Some(id)
        );
        assert_eq!(
            parse_album_id(&format!("https://open.spotify.com/intl-de/album/{}", id)),
            Some(id)
        );
        assert_eq!(parse_album_id(&format!("spotify:album:{}", id)), Some(id));
        assert_eq!(parse_album_id(id), Some(id));
    }

    /// Tests rejection of references that are not albums.
    ///
    /// Expected: None for tracks and junk
    #[test]
    fn rejects_non_albums() {
        assert_eq!(
            parse_album_id("https://open.spotify.com/track/4aawyAB9vmqN3uQ7FjRGTy"),
            None
        );
        assert_eq!(parse_album_id("not an album!"), None);
        assert_eq!(parse_album_id(""), None);
    }
}
