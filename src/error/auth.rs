use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to read token file '{path}': {source}")]
    ReadTokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Token file '{path}' is invalid: {source}")]
    ParseTokenFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Cookie '{cookie}' holds characters that cannot be sent in a request.")]
    InvalidCookieValue { cookie: &'static str },
    #[error("Token refresh request to {url} failed: {source}")]
    RefreshRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Token refresh was rejected with status {status}.")]
    RefreshRejected { status: reqwest::StatusCode },
    #[error("Failed to read token refresh response: {source}")]
    RefreshBody {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to write token file '{path}': {source}")]
    WriteTokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
