use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::PlaylistRow;

/// Maximum ids accepted by `GET /artists`.
pub const ARTIST_BATCH_SIZE: usize = 50;

/// Maximum ids accepted by `GET /audio-features`.
pub const AUDIO_FEATURE_BATCH_SIZE: usize = 100;

/// Encodes `"{id}:{secret}"` for the `Authorization: Basic` header.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{client_id}:{client_secret}"))
}

/// Reduces a playlist reference to its id.
///
/// Share URLs such as `https://open.spotify.com/playlist/<id>?si=abc` are
/// reduced to the segment after `playlist` (or their trailing path segment
/// when there is no such marker), `spotify:playlist:<id>` URIs to their last
/// component. Plain ids are returned trimmed. A reference without an id, such
/// as `https://open.spotify.com/playlist/`, yields an empty string.
pub fn parse_playlist_id(reference: &str) -> String {
    let reference = reference.trim();
    let without_query = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference)
        .trim_end_matches('/');

    if without_query.contains('/') {
        let segments: Vec<&str> = without_query
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let id = match segments.iter().position(|segment| *segment == "playlist") {
            Some(marker) => segments.get(marker + 1).copied(),
            // scheme and host are never ids
            None => segments
                .last()
                .copied()
                .filter(|segment| !segment.contains(['.', ':'])),
        };
        return id.unwrap_or_default().to_string();
    }

    if without_query.starts_with("spotify:") {
        let id = without_query.rsplit(':').next().unwrap_or_default();
        if id == "playlist" {
            return String::new();
        }
        return id.to_string();
    }

    without_query.to_string()
}

/// Splits a comma-separated playlist list, dropping blank entries.
pub fn split_playlist_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins ids into comma-separated groups of at most `size` ids each.
///
/// The groups keep the original order, so concatenating the responses for
/// each group in turn preserves the order of `ids`.
pub fn chunk_ids(ids: &[String], size: usize) -> Vec<String> {
    ids.chunks(size.max(1)).map(|chunk| chunk.join(",")).collect()
}

/// Turns a playlist display name into a file name ending in `.csv`.
pub fn csv_file_name(playlist_name: &str) -> String {
    let name = playlist_name.trim().replace(['/', '\\'], "_");
    if name.is_empty() {
        return "playlist.csv".to_string();
    }
    format!("{name}.csv")
}

/// Picks the CSV path for a playlist that is not yet in `written`.
///
/// The first choice is `<dir>/<playlist name>.csv`. When an earlier playlist
/// of the same run already took that path, the playlist id is appended
/// (`<name> (<id>).csv`) and, if that is taken too, a counter after it.
pub fn unique_csv_path(
    dir: &Path,
    playlist_name: &str,
    playlist_id: &str,
    written: &HashSet<PathBuf>,
) -> PathBuf {
    let preferred = dir.join(csv_file_name(playlist_name));
    if !written.contains(&preferred) {
        return preferred;
    }

    let with_id = format!("{} ({playlist_id})", playlist_name.trim());
    let mut candidate = dir.join(csv_file_name(&with_id));
    let mut counter = 2;
    while written.contains(&candidate) {
        candidate = dir.join(csv_file_name(&format!("{with_id} ({counter})")));
        counter += 1;
    }
    candidate
}

/// Removes rows whose track id was already seen, keeping the first one.
pub fn remove_duplicate_tracks(rows: &mut Vec<PlaylistRow>) {
    let mut seen_ids = HashSet::new();
    rows.retain(|row| seen_ids.insert(row.music_id.clone()));
}
