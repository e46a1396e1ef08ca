use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error::EtlError,
    merge, projection,
    spotify::{self, SpotifyApi},
    types::PlaylistReport,
    utils, warning, writer,
};

/// Extracts one playlist into `<out_dir>/<playlist name>.csv`.
///
/// Runs the three stages for a single playlist reference (an id or a share
/// URL):
///
/// 1. **Extract**: playlist items and name, then audio features and primary
///    artists for those items
/// 2. **Flatten**: project each payload into track, feature and artist rows
/// 3. **Join**: merge the three tables and write the result
///
/// All intermediate data lives in this call only, so a failure here leaves
/// nothing behind that could leak into the next playlist. The one piece of
/// run state is `written`, the set of files produced so far: a playlist whose
/// display name maps to an already written file gets its id appended to the
/// file name instead of overwriting the earlier playlist's output. The path is
/// added to `written` once the file is on disk.
///
/// # Errors
///
/// Returns the first [`EtlError`] raised by any stage. Nothing is written
/// unless every stage before the writer succeeded.
pub async fn run_playlist(
    api: &SpotifyApi,
    token: &str,
    reference: &str,
    out_dir: &Path,
    written: &mut HashSet<PathBuf>,
) -> Result<PlaylistReport, EtlError> {
    let playlist_id = utils::parse_playlist_id(reference);
    if playlist_id.is_empty() {
        return Err(EtlError::Config(format!(
            "'{reference}' does not contain a playlist id"
        )));
    }

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = extract_flatten_join(api, token, &playlist_id, out_dir, written, &pb).await;
    pb.finish_and_clear();
    result
}

async fn extract_flatten_join(
    api: &SpotifyApi,
    token: &str,
    playlist_id: &str,
    out_dir: &Path,
    written: &mut HashSet<PathBuf>,
    pb: &ProgressBar,
) -> Result<PlaylistReport, EtlError> {
    pb.set_message(format!("Fetching playlist {playlist_id}..."));
    let playlist = spotify::playlist::get_playlist(api, token, playlist_id).await?;

    pb.set_message(format!(
        "Fetching audio features for {} tracks...",
        playlist.items.len()
    ));
    let features = spotify::features::get_audio_features(api, token, &playlist.items).await?;

    pb.set_message(format!(
        "Fetching artists for {} tracks...",
        playlist.items.len()
    ));
    let artists = spotify::artists::get_artists(api, token, &playlist.items).await?;

    pb.set_message(format!("Writing {}...", playlist.name));
    let track_rows = projection::project_tracks(&playlist.items, &playlist.name)?;
    let feature_rows = projection::project_audio_features(&features)?;
    let artist_rows = projection::project_artists(&artists)?;

    let rows = merge::merge(&track_rows, &feature_rows, &artist_rows);

    let path = utils::unique_csv_path(out_dir, &playlist.name, playlist_id, written);
    if path != out_dir.join(utils::csv_file_name(&playlist.name)) {
        pb.suspend(|| {
            warning!(
                "Another playlist named {} was already written in this run, using {}",
                playlist.name,
                path.display()
            )
        });
    }
    writer::write_csv_file(&rows, &path).await?;
    written.insert(path.clone());

    Ok(PlaylistReport {
        playlist_id: playlist_id.to_string(),
        name: playlist.name,
        items: playlist.items.len(),
        rows: rows.len(),
        path,
    })
}
