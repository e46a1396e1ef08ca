use std::collections::HashMap;

use crate::{
    types::{ArtistRow, AudioFeatureRow, PlaylistRow, TrackRow},
    utils,
};

/// Joins the three flattened tables into one row per surviving track.
///
/// Both joins are inner joins: a track without an audio feature row (matched
/// on `music_id`) or without an artist row (matched on `artist_id`) is dropped.
/// Rows come out in track order; when a key matches several rows on the right
/// side, the matches are emitted in their original order. Finally rows with a
/// repeated `music_id` are removed, keeping the first one, so the output never
/// holds more rows than either the track or the feature table.
pub fn merge(
    tracks: &[TrackRow],
    features: &[AudioFeatureRow],
    artists: &[ArtistRow],
) -> Vec<PlaylistRow> {
    let features_by_track = index_by(features, |f| f.music_id.as_str());
    let artists_by_id = index_by(artists, |a| a.artist_id.as_str());

    let mut rows: Vec<PlaylistRow> = tracks
        .iter()
        .flat_map(|track| {
            let track_features = features_by_track
                .get(track.music_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();
            let track_artists = artists_by_id
                .get(track.artist_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default();

            track_features.iter().flat_map(move |feature| {
                track_artists
                    .iter()
                    .map(move |artist| PlaylistRow::join(track, feature, artist))
            })
        })
        .collect();

    utils::remove_duplicate_tracks(&mut rows);
    rows
}

fn index_by<'a, T>(rows: &'a [T], key: impl Fn(&'a T) -> &'a str) -> HashMap<&'a str, Vec<&'a T>> {
    let mut index: HashMap<&str, Vec<&T>> = HashMap::new();
    for row in rows {
        index.entry(key(row)).or_default().push(row);
    }
    index
}
