use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::{error::EtlError, types::PlaylistRow, utils};

/// Header of every playlist file, in [`PlaylistRow`] field order.
pub const PLAYLIST_COLUMNS: [&str; 24] = [
    "playlist_name",
    "music_name",
    "music_id",
    "music_explicit",
    "music_popularity",
    "album_name",
    "album_id",
    "album_image",
    "album_release_date",
    "artist_name",
    "artist_id",
    "music_duration",
    "music_key",
    "music_acousticness",
    "music_danceability",
    "music_energy",
    "music_instrumentalness",
    "music_liveness",
    "music_loudness",
    "music_mode",
    "music_speechiness",
    "music_valence",
    "music_tempo",
    "artist_genres",
];

/// Serializes rows as comma-separated UTF-8 text with a header row.
///
/// The header is written even when `rows` is empty. There is no index column.
pub fn to_csv(rows: &[PlaylistRow]) -> Result<Vec<u8>, EtlError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(Vec::new());

    wtr.write_record(PLAYLIST_COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    wtr.into_inner()
        .map_err(|e| EtlError::IoError(std::io::Error::other(e.to_string())))
}

/// Writes `<dir>/<playlist name>.csv`, creating `dir` if needed.
///
/// Path separators in the playlist name are replaced by `_`. An existing file
/// with the same name is overwritten. Returns the path that was written.
pub async fn write_csv(
    rows: &[PlaylistRow],
    dir: &Path,
    playlist_name: &str,
) -> Result<PathBuf, EtlError> {
    let path = dir.join(utils::csv_file_name(playlist_name));
    write_csv_file(rows, &path).await?;
    Ok(path)
}

/// Writes the rows to `path`, creating its parent directory if needed.
pub async fn write_csv_file(rows: &[PlaylistRow], path: &Path) -> Result<(), EtlError> {
    let contents = to_csv(rows)?;

    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }
    async_fs::write(path, contents).await?;

    Ok(())
}
