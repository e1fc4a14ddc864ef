use std::time::Duration;

use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Client used for both the submission and the token refresh.
///
/// # Errors
///
/// Returns an error when the TLS backend cannot be initialised.
pub fn build_client(connect_timeout: Duration, request_timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
