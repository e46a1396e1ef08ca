#![allow(dead_code)]

use playlist_etl::types::{ArtistRow, AudioFeatureRow, TrackRow};
use serde_json::{Value, json};

// Helper function to create a playlist item as returned by /playlists/{id}/tracks
pub fn playlist_item(track_id: &str, artist_id: &str) -> Value {
    json!({
        "added_at": "2023-12-01T10:00:00Z",
        "track": {
            "id": track_id,
            "name": format!("Song {track_id}"),
            "explicit": false,
            "popularity": 42,
            "album": {
                "id": format!("{track_id}_album"),
                "name": format!("Album {track_id}"),
                "release_date": "2023-01-20",
                "images": [
                    { "url": format!("https://i.scdn.co/image/{track_id}"), "height": 640, "width": 640 },
                    { "url": format!("https://i.scdn.co/image/{track_id}_small"), "height": 64, "width": 64 }
                ]
            },
            "artists": [
                { "id": artist_id, "name": format!("Artist {artist_id}") },
                { "id": "featured", "name": "Featured Artist" }
            ]
        }
    })
}

// Helper function to create an entry of /audio-features
pub fn audio_feature(track_id: &str) -> Value {
    json!({
        "id": track_id,
        "duration_ms": 215000,
        "key": 5,
        "mode": 1,
        "acousticness": 0.125,
        "danceability": 0.75,
        "energy": 0.5,
        "instrumentalness": 0.0,
        "liveness": 0.25,
        "loudness": -5.5,
        "speechiness": 0.0625,
        "valence": 0.875,
        "tempo": 120.5,
        "time_signature": 4
    })
}

// Helper function to create an entry of /artists
pub fn artist(artist_id: &str, genres: &[&str]) -> Value {
    json!({
        "id": artist_id,
        "name": format!("Artist {artist_id}"),
        "genres": genres,
        "popularity": 60
    })
}

pub fn track_row(track_id: &str, artist_id: &str) -> TrackRow {
    TrackRow {
        playlist_name: "wrapped 2023".to_string(),
        music_name: format!("Song {track_id}"),
        music_id: track_id.to_string(),
        music_explicit: false,
        music_popularity: 42,
        album_name: format!("Album {track_id}"),
        album_id: format!("{track_id}_album"),
        album_image: format!("https://i.scdn.co/image/{track_id}"),
        album_release_date: "2023-01-20".to_string(),
        artist_name: format!("Artist {artist_id}"),
        artist_id: artist_id.to_string(),
    }
}

pub fn feature_row(track_id: &str) -> AudioFeatureRow {
    AudioFeatureRow {
        music_id: track_id.to_string(),
        music_duration: 215000,
        music_key: 5,
        music_acousticness: 0.125,
        music_danceability: 0.75,
        music_energy: 0.5,
        music_instrumentalness: 0.0,
        music_liveness: 0.25,
        music_loudness: -5.5,
        music_mode: 1,
        music_speechiness: 0.0625,
        music_valence: 0.875,
        music_tempo: 120.5,
    }
}

pub fn artist_row(artist_id: &str, genres: &str) -> ArtistRow {
    ArtistRow {
        artist_id: artist_id.to_string(),
        artist_genres: genres.to_string(),
    }
}
