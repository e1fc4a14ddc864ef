use std::path::Path;

use reqwest::Client;
use reqwest::header::COOKIE;
use url::Url;

use crate::auth::{AuthToken, write_token_file};
use crate::error::AuthError;

/// Exchanges the cookies in `token_path` for fresh ones and stores the
/// server's answer verbatim in the same file.
///
/// # Errors
///
/// Returns an error when the token file cannot be read or written, the
/// request fails, or the server rejects it. The file is left untouched in
/// every failure case.
pub async fn refresh_token(
    client: &Client,
    endpoint: &Url,
    token_path: &Path,
) -> Result<(), AuthError> {
    let cookies = AuthToken::load(token_path)?.cookie_header()?;
    let response = client
        .get(endpoint.clone())
        .header(COOKIE, cookies)
        .send()
        .await
        .map_err(|err| AuthError::RefreshRequest {
            url: endpoint.to_string(),
            source: err,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuthError::RefreshRejected { status });
    }
    let body = response
        .bytes()
        .await
        .map_err(|err| AuthError::RefreshBody { source: err })?;
    write_token_file(token_path, &body)?;
    tracing::debug!("Token file {} refreshed", token_path.display());
    Ok(())
}
