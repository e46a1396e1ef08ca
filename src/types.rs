use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Raw playlist data as returned by the playlist endpoints.
#[derive(Debug, Clone)]
pub struct PlaylistData {
    pub name: String,
    pub items: Vec<serde_json::Value>,
}

/// One playlist item flattened to the track level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRow {
    pub playlist_name: String,
    pub music_name: String,
    pub music_id: String,
    pub music_explicit: bool,
    pub music_popularity: i64,
    pub album_name: String,
    pub album_id: String,
    pub album_image: String,
    pub album_release_date: String,
    pub artist_name: String,
    pub artist_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatureRow {
    pub music_id: String,
    pub music_duration: i64,
    pub music_key: i64,
    pub music_acousticness: f64,
    pub music_danceability: f64,
    pub music_energy: f64,
    pub music_instrumentalness: f64,
    pub music_liveness: f64,
    pub music_loudness: f64,
    pub music_mode: i64,
    pub music_speechiness: f64,
    pub music_valence: f64,
    pub music_tempo: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRow {
    pub artist_id: String,
    pub artist_genres: String,
}

/// A track joined with its audio features and its primary artist's genres.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistRow {
    pub playlist_name: String,
    pub music_name: String,
    pub music_id: String,
    pub music_explicit: bool,
    pub music_popularity: i64,
    pub album_name: String,
    pub album_id: String,
    pub album_image: String,
    pub album_release_date: String,
    pub artist_name: String,
    pub artist_id: String,
    pub music_duration: i64,
    pub music_key: i64,
    pub music_acousticness: f64,
    pub music_danceability: f64,
    pub music_energy: f64,
    pub music_instrumentalness: f64,
    pub music_liveness: f64,
    pub music_loudness: f64,
    pub music_mode: i64,
    pub music_speechiness: f64,
    pub music_valence: f64,
    pub music_tempo: f64,
    pub artist_genres: String,
}

impl PlaylistRow {
    pub fn join(track: &TrackRow, features: &AudioFeatureRow, artist: &ArtistRow) -> Self {
        Self {
            playlist_name: track.playlist_name.clone(),
            music_name: track.music_name.clone(),
            music_id: track.music_id.clone(),
            music_explicit: track.music_explicit,
            music_popularity: track.music_popularity,
            album_name: track.album_name.clone(),
            album_id: track.album_id.clone(),
            album_image: track.album_image.clone(),
            album_release_date: track.album_release_date.clone(),
            artist_name: track.artist_name.clone(),
            artist_id: track.artist_id.clone(),
            music_duration: features.music_duration,
            music_key: features.music_key,
            music_acousticness: features.music_acousticness,
            music_danceability: features.music_danceability,
            music_energy: features.music_energy,
            music_instrumentalness: features.music_instrumentalness,
            music_liveness: features.music_liveness,
            music_loudness: features.music_loudness,
            music_mode: features.music_mode,
            music_speechiness: features.music_speechiness,
            music_valence: features.music_valence,
            music_tempo: features.music_tempo,
            artist_genres: artist.artist_genres.clone(),
        }
    }
}

/// Outcome of one successfully processed playlist.
#[derive(Debug, Clone)]
pub struct PlaylistReport {
    pub playlist_id: String,
    pub name: String,
    pub items: usize,
    pub rows: usize,
    pub path: std::path::PathBuf,
}

#[derive(Tabled)]
pub struct ReportTableRow {
    pub playlist: String,
    pub status: String,
    pub items: String,
    pub rows: String,
    pub file: String,
}
