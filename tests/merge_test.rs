mod common;

use std::collections::HashSet;

use playlist_etl::merge::merge;

use common::{artist_row, feature_row, track_row};

#[test]
fn test_merge_all_tracks_resolved() {
    let tracks = vec![
        track_row("t1", "a1"),
        track_row("t2", "a2"),
        track_row("t3", "a3"),
    ];
    let features = vec![feature_row("t1"), feature_row("t2"), feature_row("t3")];
    let artists = vec![
        artist_row("a1", "rock"),
        artist_row("a2", "pop"),
        artist_row("a3", "jazz"),
    ];

    let rows = merge(&tracks, &features, &artists);

    assert_eq!(rows.len(), 3);
    let ids: Vec<&str> = rows.iter().map(|r| r.music_id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
    let genres: Vec<&str> = rows.iter().map(|r| r.artist_genres.as_str()).collect();
    assert_eq!(genres, vec!["rock", "pop", "jazz"]);

    // audio features are carried over
    assert_eq!(rows[1].music_duration, 215000);
    assert_eq!(rows[1].music_tempo, 120.5);
    assert_eq!(rows[1].music_loudness, -5.5);
}

#[test]
fn test_merge_drops_track_without_features() {
    let tracks = vec![track_row("t1", "a1"), track_row("t2", "a2")];
    let features = vec![feature_row("t2")];
    let artists = vec![artist_row("a1", "rock"), artist_row("a2", "pop")];

    let rows = merge(&tracks, &features, &artists);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].music_id, "t2");
}

#[test]
fn test_merge_drops_track_without_artist() {
    let tracks = vec![track_row("t1", "a1"), track_row("t2", "missing")];
    let features = vec![feature_row("t1"), feature_row("t2")];
    let artists = vec![artist_row("a1", "rock")];

    let rows = merge(&tracks, &features, &artists);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].music_id, "t1");
}

#[test]
fn test_merge_shared_artist() {
    let tracks = vec![track_row("t1", "a1"), track_row("t2", "a1")];
    let features = vec![feature_row("t1"), feature_row("t2")];
    // the artist fetcher returns one record per track, so the artist repeats
    let artists = vec![artist_row("a1", "samba"), artist_row("a1", "samba")];

    let rows = merge(&tracks, &features, &artists);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].music_id, "t1");
    assert_eq!(rows[1].music_id, "t2");
    assert!(rows.iter().all(|r| r.artist_genres == "samba"));
}

#[test]
fn test_merge_deduplicates_repeated_tracks() {
    // the same track added twice to a playlist
    let tracks = vec![
        track_row("t1", "a1"),
        track_row("t2", "a2"),
        track_row("t1", "a1"),
    ];
    let features = vec![feature_row("t1"), feature_row("t2"), feature_row("t1")];
    let artists = vec![
        artist_row("a1", "first"),
        artist_row("a2", "pop"),
        artist_row("a1", "second"),
    ];

    let rows = merge(&tracks, &features, &artists);

    let ids: Vec<&str> = rows.iter().map(|r| r.music_id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2"]);
    // keep-first: the first artist row for a1 wins
    assert_eq!(rows[0].artist_genres, "first");
}

#[test]
fn test_merge_row_count_bounded_and_unique() {
    let tracks: Vec<_> = (0..30)
        .map(|i| track_row(&format!("t{}", i % 20), &format!("a{}", i % 7)))
        .collect();
    let features: Vec<_> = (0..25)
        .filter(|i| i % 3 != 0)
        .map(|i| feature_row(&format!("t{i}")))
        .collect();
    let artists: Vec<_> = (0..30)
        .filter(|i| i % 5 != 0)
        .map(|i| artist_row(&format!("a{}", i % 7), "genre"))
        .collect();

    let rows = merge(&tracks, &features, &artists);

    assert!(rows.len() <= tracks.len().min(features.len()));

    let unique: HashSet<&str> = rows.iter().map(|r| r.music_id.as_str()).collect();
    assert_eq!(unique.len(), rows.len());

    // deterministic for a fixed input
    assert_eq!(rows, merge(&tracks, &features, &artists));
}

#[test]
fn test_merge_empty_inputs() {
    assert!(merge(&[], &[], &[]).is_empty());
    assert!(merge(&[track_row("t1", "a1")], &[], &[artist_row("a1", "x")]).is_empty());
}
