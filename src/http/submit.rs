use http::HeaderValue;
use reqwest::header::COOKIE;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{AppError, AppResult, HttpError};

#[derive(Debug)]
pub struct SubmissionResponse {
    pub status: StatusCode,
    /// `None` when the body could not be read.
    pub body: Option<String>,
}

/// POSTs the test payload to `endpoint`.
///
/// # Errors
///
/// Returns an error only when the request cannot be sent; failing to read
/// the body is logged and reported as `body: None`.
pub async fn submit_test(
    client: &Client,
    endpoint: &Url,
    query: &[(&str, &str)],
    payload: String,
    cookies: HeaderValue,
) -> AppResult<SubmissionResponse> {
    tracing::debug!("Submitting performance test to {}", endpoint);
    let response = client
        .post(endpoint.clone())
        .query(query)
        .header(COOKIE, cookies)
        .body(payload)
        .send()
        .await
        .map_err(|err| {
            AppError::http(HttpError::RequestFailed {
                url: endpoint.to_string(),
                source: err,
            })
        })?;

    let status = response.status();
    let body = match response.text().await {
        Ok(body) => Some(body),
        Err(err) => {
            tracing::warn!("{}", HttpError::ReadResponse { source: err });
            None
        }
    };
    Ok(SubmissionResponse { status, body })
}
