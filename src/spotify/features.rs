use serde_json::Value;

use crate::{
    error::EtlError,
    projection,
    spotify::{SpotifyApi, take_array},
    utils::{self, AUDIO_FEATURE_BATCH_SIZE},
};

/// Retrieves the audio features of every track in a playlist.
///
/// Collects the track id of each playlist item and delegates to
/// [`get_audio_features_for_ids`].
///
/// # Errors
///
/// - [`EtlError::Structure`] if an item has no `track.id`
/// - any error of [`get_audio_features_for_ids`]
pub async fn get_audio_features(
    api: &SpotifyApi,
    token: &str,
    items: &[Value],
) -> Result<Vec<Value>, EtlError> {
    let ids = projection::track_ids(items)?;
    get_audio_features_for_ids(api, token, &ids).await
}

/// Retrieves audio feature vectors for the given track ids.
///
/// The ids are sent to `GET /audio-features` in groups of at most
/// [`AUDIO_FEATURE_BATCH_SIZE`] and the `audio_features` arrays of the
/// responses are concatenated in request order. Tracks Spotify could not
/// analyze come back as `null` entries and are kept as such.
///
/// # Errors
///
/// - [`EtlError::Api`] for non-success statuses or bodies that are not JSON
/// - [`EtlError::Structure`] if a response has no `audio_features` array
pub async fn get_audio_features_for_ids(
    api: &SpotifyApi,
    token: &str,
    ids: &[String],
) -> Result<Vec<Value>, EtlError> {
    let mut features = Vec::with_capacity(ids.len());

    for chunk in utils::chunk_ids(ids, AUDIO_FEATURE_BATCH_SIZE) {
        let api_url = format!(
            "{uri}/audio-features?ids={ids}",
            uri = api.api_url(),
            ids = chunk
        );

        let body = api.get_json(&api_url, token).await?;
        features.extend(take_array(body, "audio_features")?);
    }

    Ok(features)
}
