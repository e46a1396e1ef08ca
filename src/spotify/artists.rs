use serde_json::Value;

use crate::{
    error::EtlError,
    projection,
    spotify::{SpotifyApi, take_array},
    utils::{self, ARTIST_BATCH_SIZE},
};

/// Retrieves the primary artist of every track in a playlist.
///
/// Collects the first-listed artist id of each playlist item, in playlist
/// order and without de-duplication, and delegates to [`get_artists_for_ids`].
///
/// # Errors
///
/// - [`EtlError::Structure`] if an item has no `track.artists[0].id`
/// - any error of [`get_artists_for_ids`]
pub async fn get_artists(
    api: &SpotifyApi,
    token: &str,
    items: &[Value],
) -> Result<Vec<Value>, EtlError> {
    let ids = projection::primary_artist_ids(items)?;
    get_artists_for_ids(api, token, &ids).await
}

/// Retrieves artist records for the given artist ids.
///
/// Issues one `GET /artists` per group of at most [`ARTIST_BATCH_SIZE`] ids
/// (120 ids result in three calls of 50, 50 and 20) and concatenates the
/// `artists` arrays in request order. The result has one entry per requested
/// id, repeated ids included.
///
/// # Errors
///
/// - [`EtlError::Api`] for non-success statuses or bodies that are not JSON
/// - [`EtlError::Structure`] if a response has no `artists` array
pub async fn get_artists_for_ids(
    api: &SpotifyApi,
    token: &str,
    ids: &[String],
) -> Result<Vec<Value>, EtlError> {
    let mut artists = Vec::with_capacity(ids.len());

    for chunk in utils::chunk_ids(ids, ARTIST_BATCH_SIZE) {
        let api_url = format!(
            "{uri}/artists?ids={ids}",
            uri = api.api_url(),
            ids = chunk
        );

        let body = api.get_json(&api_url, token).await?;
        artists.extend(take_array(body, "artists")?);
    }

    Ok(artists)
}
