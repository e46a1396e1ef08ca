mod common;

use playlist_etl::merge::merge;
use playlist_etl::projection::{project_artists, project_audio_features, project_tracks};
use playlist_etl::types::PlaylistRow;
use playlist_etl::writer::*;

use common::{artist, audio_feature, playlist_item};

fn sample_rows() -> Vec<PlaylistRow> {
    let items = vec![
        playlist_item("t1", "a1"),
        playlist_item("t2", "a2"),
        playlist_item("t3", "a1"),
    ];
    let features = vec![audio_feature("t1"), audio_feature("t2"), audio_feature("t3")];
    let artists = vec![
        artist("a1", &["brazilian rock", "mpb"]),
        artist("a2", &[]),
        artist("a1", &["brazilian rock", "mpb"]),
    ];

    merge(
        &project_tracks(&items, "wrapped 2023").unwrap(),
        &project_audio_features(&features).unwrap(),
        &project_artists(&artists).unwrap(),
    )
}

#[test]
fn test_to_csv_header_matches_row_fields() {
    let bytes = to_csv(&sample_rows()).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    let header = text.lines().next().unwrap();
    assert_eq!(header, PLAYLIST_COLUMNS.join(","));

    // header + one line per row, no index column
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().nth(1).unwrap().starts_with("wrapped 2023,Song t1,t1,"));
}

#[test]
fn test_to_csv_empty_rows_still_has_header() {
    let text = String::from_utf8(to_csv(&[]).unwrap()).unwrap();

    assert_eq!(text, format!("{}\n", PLAYLIST_COLUMNS.join(",")));
}

#[tokio::test]
async fn test_write_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let rows = sample_rows();

    let path = write_csv(&rows, dir.path(), "wrapped 2023").await.unwrap();

    assert_eq!(path, dir.path().join("wrapped 2023.csv"));

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let read_back: Vec<PlaylistRow> = rdr.deserialize().collect::<Result<_, _>>().unwrap();

    assert_eq!(read_back, rows);
    assert_eq!(read_back[0].artist_genres, "brazilian rock, mpb");
    assert_eq!(read_back[1].artist_genres, "");
}

#[tokio::test]
async fn test_write_csv_creates_directory_and_sanitizes_name() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out").join("csv");

    let path = write_csv(&sample_rows(), &nested, "rock/pop best of").await.unwrap();

    assert_eq!(path, nested.join("rock_pop best of.csv"));
    assert!(path.is_file());
}
