//! Configuration management for the playlist ETL.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files: the Spotify client credentials, the
//! API endpoints, the market used for track listings, the default playlist list
//! and the output directory.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{error::EtlError, utils};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MARKET: &str = "BR";

/// Loads environment variables from `.env` files.
///
/// Reads `.env` in the working directory first and then the one located in the
/// platform-specific local data directory under `playlist-etl/.env`. `dotenv`
/// never overrides a variable that is already set, so the process environment
/// wins over both files and the working directory wins over the data directory.
///
/// Missing files are not an error; the credentials may come from the process
/// environment alone.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/playlist-etl/.env`
/// - macOS: `~/Library/Application Support/playlist-etl/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-etl/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> crate::Res<()> {
    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            return Err(Box::new(e));
        }
    }

    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)?;
    }

    Ok(())
}

/// Location of the `.env` file in the local data directory.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-etl/.env");
    path
}

/// Returns the Spotify API client ID.
///
/// # Errors
///
/// Returns [`EtlError::Config`] if `SPOTIFY_API_AUTH_CLIENT_ID` is not set.
pub fn spotify_client_id() -> Result<String, EtlError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret.
///
/// The secret must never be printed; only the encoded credential pair leaves
/// the process, inside the token request's `Authorization` header.
///
/// # Errors
///
/// Returns [`EtlError::Config`] if `SPOTIFY_API_AUTH_CLIENT_SECRET` is not set.
pub fn spotify_client_secret() -> Result<String, EtlError> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the Spotify token endpoint used for the client-credentials grant.
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns the market passed to the playlist track listing.
pub fn spotify_market() -> String {
    optional("SPOTIFY_MARKET", DEFAULT_MARKET)
}

/// Returns the playlists configured in `PLAYLIST_IDS`.
///
/// Entries are separated by commas and may be plain ids or share URLs. Blank
/// entries are dropped. An unset variable yields an empty list.
pub fn playlist_ids() -> Vec<String> {
    env::var("PLAYLIST_IDS")
        .map(|raw| utils::split_playlist_list(&raw))
        .unwrap_or_default()
}

/// Returns the directory the CSV files are written to.
pub fn output_dir() -> PathBuf {
    PathBuf::from(optional("PLAYLIST_OUTPUT_DIR", "."))
}

fn required(key: &str) -> Result<String, EtlError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(EtlError::Config(format!("{key} must be set"))),
    }
}

fn optional(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
