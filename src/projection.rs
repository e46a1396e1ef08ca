//! Projection of raw Spotify JSON records into flat rows.
//!
//! Each projector is a pure function: it walks a list of records, reads a
//! fixed set of JSON pointers from each one and builds a fresh row value. A
//! missing or mistyped key is a structural error naming the record index and
//! the pointer that failed.

use serde_json::Value;

use crate::{
    error::EtlError,
    types::{ArtistRow, AudioFeatureRow, TrackRow},
};

/// Flattens playlist items into track rows, one row per item.
///
/// # Errors
///
/// Returns [`EtlError::Structure`] if any item lacks one of the mapped keys,
/// including items whose `track` is `null` (removed from the catalog) and
/// albums without images.
pub fn project_tracks(items: &[Value], playlist_name: &str) -> Result<Vec<TrackRow>, EtlError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| -> Result<TrackRow, EtlError> {
            Ok(TrackRow {
                playlist_name: playlist_name.to_string(),
                music_name: str_at(item, i, "/track/name")?,
                music_id: str_at(item, i, "/track/id")?,
                music_explicit: bool_at(item, i, "/track/explicit")?,
                music_popularity: i64_at(item, i, "/track/popularity")?,
                album_name: str_at(item, i, "/track/album/name")?,
                album_id: str_at(item, i, "/track/album/id")?,
                album_image: str_at(item, i, "/track/album/images/0/url")?,
                album_release_date: str_at(item, i, "/track/album/release_date")?,
                artist_name: str_at(item, i, "/track/artists/0/name")?,
                artist_id: str_at(item, i, "/track/artists/0/id")?,
            })
        })
        .collect()
}

/// Flattens audio feature vectors, one row per analyzed track.
///
/// `null` entries, which Spotify returns for tracks it has no analysis for,
/// produce no row.
///
/// # Errors
///
/// Returns [`EtlError::Structure`] if a non-null vector lacks a mapped key.
pub fn project_audio_features(features: &[Value]) -> Result<Vec<AudioFeatureRow>, EtlError> {
    features
        .iter()
        .enumerate()
        .filter(|(_, feature)| !feature.is_null())
        .map(|(i, feature)| -> Result<AudioFeatureRow, EtlError> {
            Ok(AudioFeatureRow {
                music_id: str_at(feature, i, "/id")?,
                music_duration: i64_at(feature, i, "/duration_ms")?,
                music_key: i64_at(feature, i, "/key")?,
                music_acousticness: f64_at(feature, i, "/acousticness")?,
                music_danceability: f64_at(feature, i, "/danceability")?,
                music_energy: f64_at(feature, i, "/energy")?,
                music_instrumentalness: f64_at(feature, i, "/instrumentalness")?,
                music_liveness: f64_at(feature, i, "/liveness")?,
                music_loudness: f64_at(feature, i, "/loudness")?,
                music_mode: i64_at(feature, i, "/mode")?,
                music_speechiness: f64_at(feature, i, "/speechiness")?,
                music_valence: f64_at(feature, i, "/valence")?,
                music_tempo: f64_at(feature, i, "/tempo")?,
            })
        })
        .collect()
}

/// Flattens artist records into `(id, genres)` rows, one row per record.
///
/// Genres are joined with `", "`; an artist without genres gets an empty
/// string. Repeated artists are kept as repeated rows. `null` entries (ids
/// Spotify could not resolve) produce no row.
///
/// # Errors
///
/// Returns [`EtlError::Structure`] if a record lacks `id` or `genres`, or if
/// a genre is not a string.
pub fn project_artists(artists: &[Value]) -> Result<Vec<ArtistRow>, EtlError> {
    artists
        .iter()
        .enumerate()
        .filter(|(_, artist)| !artist.is_null())
        .map(|(i, artist)| -> Result<ArtistRow, EtlError> {
            let genres = value_at(artist, i, "/genres")?
                .as_array()
                .ok_or_else(|| EtlError::structure(i, "/genres", "an array"))?
                .iter()
                .map(|genre| {
                    genre
                        .as_str()
                        .ok_or_else(|| EtlError::structure(i, "/genres", "string entries"))
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(ArtistRow {
                artist_id: str_at(artist, i, "/id")?,
                artist_genres: genres.join(", "),
            })
        })
        .collect()
}

/// Track id of every playlist item, in playlist order.
pub fn track_ids(items: &[Value]) -> Result<Vec<String>, EtlError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| str_at(item, i, "/track/id"))
        .collect()
}

/// First-listed artist id of every playlist item, in playlist order.
pub fn primary_artist_ids(items: &[Value]) -> Result<Vec<String>, EtlError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| str_at(item, i, "/track/artists/0/id"))
        .collect()
}

fn value_at<'a>(record: &'a Value, index: usize, pointer: &str) -> Result<&'a Value, EtlError> {
    record
        .pointer(pointer)
        .ok_or_else(|| EtlError::structure(index, pointer, "a value"))
}

fn str_at(record: &Value, index: usize, pointer: &str) -> Result<String, EtlError> {
    value_at(record, index, pointer)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| EtlError::structure(index, pointer, "a string"))
}

fn bool_at(record: &Value, index: usize, pointer: &str) -> Result<bool, EtlError> {
    value_at(record, index, pointer)?
        .as_bool()
        .ok_or_else(|| EtlError::structure(index, pointer, "a boolean"))
}

fn i64_at(record: &Value, index: usize, pointer: &str) -> Result<i64, EtlError> {
    value_at(record, index, pointer)?
        .as_i64()
        .ok_or_else(|| EtlError::structure(index, pointer, "an integer"))
}

fn f64_at(record: &Value, index: usize, pointer: &str) -> Result<f64, EtlError> {
    value_at(record, index, pointer)?
        .as_f64()
        .ok_or_else(|| EtlError::structure(index, pointer, "a number"))
}
