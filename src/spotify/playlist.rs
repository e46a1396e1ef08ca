use serde_json::Value;

use crate::{
    error::EtlError,
    spotify::{SpotifyApi, take_array},
    types::PlaylistData,
};

/// Retrieves every item of a playlist.
///
/// Requests `GET /playlists/{id}/tracks?market=..` and keeps following the
/// `next` URL of each page until it is `null`, so playlists longer than one
/// page are returned in full. Items are returned as raw JSON in playlist order.
///
/// # Errors
///
/// - [`EtlError::Api`] for non-success statuses or bodies that are not JSON
/// - [`EtlError::Structure`] if a page has no `items` array
pub async fn get_playlist_items(
    api: &SpotifyApi,
    token: &str,
    playlist_id: &str,
) -> Result<Vec<Value>, EtlError> {
    let mut items: Vec<Value> = Vec::new();
    let mut next_url = Some(format!(
        "{uri}/playlists/{id}/tracks?market={market}",
        uri = api.api_url(),
        id = playlist_id,
        market = api.market()
    ));

    while let Some(url) = next_url {
        let mut page = api.get_json(&url, token).await?;
        next_url = page
            .get_mut("next")
            .and_then(|next| next.take().as_str().map(str::to_string));
        items.extend(take_array(page, "items")?);
    }

    Ok(items)
}

/// Retrieves the display name of a playlist from `GET /playlists/{id}`.
///
/// # Errors
///
/// - [`EtlError::Api`] for non-success statuses or bodies that are not JSON
/// - [`EtlError::Structure`] if the body has no `name` string
pub async fn get_playlist_name(
    api: &SpotifyApi,
    token: &str,
    playlist_id: &str,
) -> Result<String, EtlError> {
    let url = format!(
        "{uri}/playlists/{id}?fields=name",
        uri = api.api_url(),
        id = playlist_id
    );

    let json = api.get_json(&url, token).await?;

    json["name"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| EtlError::Structure("playlist has no 'name'".to_string()))
}

/// Retrieves the items and the display name of a playlist.
pub async fn get_playlist(
    api: &SpotifyApi,
    token: &str,
    playlist_id: &str,
) -> Result<PlaylistData, EtlError> {
    let items = get_playlist_items(api, token, playlist_id).await?;
    let name = get_playlist_name(api, token, playlist_id).await?;

    Ok(PlaylistData { name, items })
}
