//! # Spotify Integration Module
//!
//! This module is the extract stage of the pipeline. It wraps the handful of
//! Spotify Web API endpoints the ETL needs and returns their JSON payloads
//! largely untouched; flattening happens in [`crate::projection`].
//!
//! ## Architecture
//!
//! ```text
//! Pipeline (one playlist at a time)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     ├── Playlist (track listing + display name)
//!     ├── Audio features (batched, 100 ids per call)
//!     └── Artists (batched, 50 ids per call)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /playlists/{id}/tracks` - playlist items, following `next` pages
//! - `GET /playlists/{id}` - playlist display name
//! - `GET /audio-features?ids=` - acoustic feature vectors
//! - `GET /artists?ids=` - artist metadata (genres)
//!
//! ## Error Handling
//!
//! Every request goes through `error_for_status`; non-success statuses,
//! transport failures and bodies that are not JSON surface as
//! [`EtlError::Api`]. A body that is JSON but lacks an expected key surfaces
//! as [`EtlError::Structure`]. Nothing is retried and calls are issued one
//! after another.

pub mod artists;
pub mod auth;
pub mod features;
pub mod playlist;

use reqwest::Client;
use serde_json::Value;

use crate::{config, error::EtlError};

/// Endpoints and HTTP client shared by every call of a run.
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    client: Client,
    api_url: String,
    token_url: String,
    market: String,
}

impl SpotifyApi {
    pub fn new(
        api_url: impl Into<String>,
        token_url: impl Into<String>,
        market: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token_url: token_url.into(),
            market: market.into(),
        }
    }

    /// Builds the client from `SPOTIFY_API_URL`, `SPOTIFY_API_TOKEN_URL` and
    /// `SPOTIFY_MARKET`.
    pub fn from_env() -> Self {
        Self::new(
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
            config::spotify_market(),
        )
    }

    /// Same endpoints, different market.
    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = market.into();
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Issues an authenticated GET and parses the body as JSON.
    pub(crate) async fn get_json(&self, url: &str, token: &str) -> Result<Value, EtlError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Value>().await?)
    }
}

/// Returns the array stored under `key`, or a structural error.
pub(crate) fn take_array(mut body: Value, key: &str) -> Result<Vec<Value>, EtlError> {
    match body.get_mut(key).map(Value::take) {
        Some(Value::Array(values)) => Ok(values),
        _ => Err(EtlError::Structure(format!(
            "response has no '{key}' array"
        ))),
    }
}
