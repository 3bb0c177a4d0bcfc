//! Spotify Web API client.
//!
//! A thin client over the album and artist-album endpoints. One call sends
//! one request: no token refresh, no retry, no page walking.

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::source::AlbumSource;
use crate::config::ClientConfig;
use crate::error::{Result, SpotifyError};
use crate::models::{Album, AlbumType, Market, Page, SimplifiedAlbum, SimplifiedTrack};

/// Error body the service sends with non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

/// Response wrapper of the several-albums endpoint.
#[derive(Debug, Deserialize)]
struct SeveralAlbums {
    albums: Vec<Option<Album>>,
}

/// Spotify Web API client.
///
/// # Example
///
/// ```rust,no_run
/// use spotweb::{ClientConfig, Market, SpotifyApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = SpotifyApi::new(ClientConfig::from_env()?)?;
///     if let Some(album) = api.get_album("4aawyAB9vmqN3uQ7FjRGTy", Some(Market::Us)).await? {
///         println!("{} by {}", album.name, album.artists_string(", "));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    client: Client,
    config: ClientConfig,
}

impl SpotifyApi {
    /// Create a client from a validated config.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .user_agent(concat!("spotweb/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET an endpoint and decode the body. `Ok(None)` on 404.
    async fn get_api<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Option<T>> {
        let url = self.config.endpoint(endpoint);
        debug!("GET {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("{} not found", url);
            return Ok(None);
        }

        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Spotify API error {} for {}", status.as_u16(), url);
            return Err(error_for_status(status.as_u16(), retry_after, &body));
        }

        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Get an album by ID.
    pub async fn get_album(&self, album_id: &str, market: Option<Market>) -> Result<Option<Album>> {
        self.get_api(&format!("albums/{}", album_id), &market_param(market))
            .await
    }

    /// Get up to 20 albums in one request. Unknown ids come back as `None`
    /// in their position.
    pub async fn get_several_albums(
        &self,
        album_ids: &[&str],
        market: Option<Market>,
    ) -> Result<Vec<Option<Album>>> {
        let mut params = market_param(market);
        params.push(("ids", album_ids.join(",")));

        let response: Option<SeveralAlbums> = self.get_api("albums", &params).await?;
        Ok(response.map(|r| r.albums).unwrap_or_default())
    }

    /// Get one page of an album's tracks.
    pub async fn get_album_tracks(
        &self,
        album_id: &str,
        market: Option<Market>,
        limit: u32,
        offset: u32,
    ) -> Result<Option<Page<SimplifiedTrack>>> {
        let mut params = market_param(market);
        params.push(("limit", limit.to_string()));
        params.push(("offset", offset.to_string()));

        self.get_api(&format!("albums/{}/tracks", album_id), &params)
            .await
    }

    /// Get one page of an artist's albums. Items carry `album_group`.
    ///
    /// An empty `include_groups` leaves the filter to the service default.
    pub async fn get_artist_albums(
        &self,
        artist_id: &str,
        include_groups: &[AlbumType],
        market: Option<Market>,
        limit: u32,
        offset: u32,
    ) -> Result<Option<Page<SimplifiedAlbum>>> {
        let mut params = market_param(market);
        if !include_groups.is_empty() {
            params.push(("include_groups", include_groups_param(include_groups)));
        }
        params.push(("limit", limit.to_string()));
        params.push(("offset", offset.to_string()));

        self.get_api(&format!("artists/{}/albums", artist_id), &params)
            .await
    }
}

#[async_trait]
impl AlbumSource for SpotifyApi {
    async fn album(&self, id: &str, market: Option<Market>) -> Result<Option<Album>> {
        self.get_album(id, market).await
    }
}

fn market_param(market: Option<Market>) -> Vec<(&'static str, String)> {
    market
        .map(|m| vec![("market", m.code().to_string())])
        .unwrap_or_default()
}

fn include_groups_param(groups: &[AlbumType]) -> String {
    groups
        .iter()
        .map(AlbumType::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Map a non-success, non-404 response to an error.
fn error_for_status(status: u16, retry_after: Option<u64>, body: &str) -> SpotifyError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        400 => SpotifyError::BadRequest(message),
        401 | 403 => SpotifyError::Unauthorized(message),
        429 => SpotifyError::RateLimited { retry_after },
        _ => SpotifyError::Api { status, message },
    }
}
