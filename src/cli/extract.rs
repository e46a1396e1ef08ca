use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use tabled::Table;

use crate::{
    config, error,
    error::EtlError,
    info, pipeline,
    spotify::{self, SpotifyApi},
    success,
    types::ReportTableRow,
    warning,
};

pub async fn extract(playlists: Vec<String>, output_dir: Option<PathBuf>, market: Option<String>) {
    let playlists = match resolve_playlists(playlists, config::playlist_ids()) {
        Ok(playlists) => playlists,
        Err(e) => error!("{}", e),
    };

    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };
    let client_secret = match config::spotify_client_secret() {
        Ok(secret) => secret,
        Err(e) => error!("{}", e),
    };

    let mut api = SpotifyApi::from_env();
    if let Some(market) = market {
        api = api.with_market(market);
    }
    let out_dir = output_dir.unwrap_or_else(config::output_dir);

    info!("Requesting access token");
    let token = match spotify::auth::client_credentials(&api, &client_id, &client_secret).await {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };
    success!(
        "Access token obtained, valid for {} seconds",
        token.expires_in
    );

    let table_rows = extract_playlists(&api, &token.access_token, &playlists, &out_dir).await;

    let table = Table::new(table_rows);
    println!("{}", table);
}

/// Picks the playlists to extract: the command-line references, or the
/// configured list when none were given.
///
/// # Errors
///
/// Returns [`EtlError::Config`] when both are empty.
pub fn resolve_playlists(
    args: Vec<String>,
    configured: Vec<String>,
) -> Result<Vec<String>, EtlError> {
    let playlists = if args.is_empty() { configured } else { args };

    if playlists.is_empty() {
        return Err(EtlError::Config(
            "No playlists given. Pass playlist ids or URLs, or set PLAYLIST_IDS.".to_string(),
        ));
    }

    Ok(playlists)
}

/// Runs the pipeline for every playlist with one shared token.
///
/// A failing playlist is logged as a warning and reported as `failed`; the
/// remaining playlists still run. Returns one summary row per playlist, in
/// input order.
pub async fn extract_playlists(
    api: &SpotifyApi,
    token: &str,
    playlists: &[String],
    out_dir: &Path,
) -> Vec<ReportTableRow> {
    let mut table_rows: Vec<ReportTableRow> = Vec::with_capacity(playlists.len());
    let mut written: HashSet<PathBuf> = HashSet::new();

    for reference in playlists {
        info!("Extracting playlist {}", reference);

        match pipeline::run_playlist(api, token, reference, out_dir, &mut written).await {
            Ok(report) => {
                success!(
                    "Playlist {} downloaded: {} tracks fetched, {} rows written to {}",
                    report.name,
                    report.items,
                    report.rows,
                    report.path.display()
                );
                table_rows.push(ReportTableRow {
                    playlist: report.name,
                    status: "ok".to_string(),
                    items: report.items.to_string(),
                    rows: report.rows.to_string(),
                    file: report.path.display().to_string(),
                });
            }
            Err(e) => {
                warning!("Playlist {} not downloaded: {}", reference, e);
                table_rows.push(ReportTableRow {
                    playlist: reference.clone(),
                    status: "failed".to_string(),
                    items: "-".to_string(),
                    rows: "-".to_string(),
                    file: "-".to_string(),
                });
            }
        }
    }

    table_rows
}
