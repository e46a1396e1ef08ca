use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::{error::EtlError, spotify::SpotifyApi, types::Token, utils};

/// Exchanges the application's client id and secret for a bearer token.
///
/// Implements the OAuth 2.0 client-credentials grant: the `"{id}:{secret}"`
/// pair is base64 encoded into an `Authorization: Basic` header and the form
/// body carries `grant_type=client_credentials`. The returned token is used
/// for every playlist of the run and is never refreshed.
///
/// # Errors
///
/// Every failure maps to [`EtlError::Auth`]:
/// - the token endpoint is unreachable
/// - the endpoint answers with a non-success status
/// - the body is not JSON or has no `access_token` string
///
/// # Example
///
/// ```
/// let api = SpotifyApi::from_env();
/// let token = client_credentials(&api, &client_id, &client_secret).await?;
/// println!("Token valid for {} seconds", token.expires_in);
/// ```
pub async fn client_credentials(
    api: &SpotifyApi,
    client_id: &str,
    client_secret: &str,
) -> Result<Token, EtlError> {
    let credentials = utils::basic_credentials(client_id, client_secret);

    let res = api
        .client()
        .post(api.token_url())
        .header(AUTHORIZATION, format!("Basic {credentials}"))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| EtlError::Auth(e.to_string()))?
        .error_for_status()
        .map_err(|e| EtlError::Auth(e.to_string()))?;

    let json: Value = res.json().await.map_err(|e| EtlError::Auth(e.to_string()))?;

    let access_token = json["access_token"]
        .as_str()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| EtlError::Auth("response lacks 'access_token'".to_string()))?;

    Ok(Token {
        access_token: access_token.to_string(),
        token_type: json["token_type"]
            .as_str()
            .unwrap_or("Bearer")
            .to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
