use url::Url;

use crate::error::{AppError, AppResult, ValidationError};

pub const SUBMIT_PATH: &str = "/api/load-test-smps";
pub const TOKEN_REFRESH_PATH: &str = "/api/gettoken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub submit: Url,
    pub refresh: Url,
}

impl Endpoints {
    /// Builds both endpoints under `server`, keeping any path prefix it has.
    ///
    /// # Errors
    ///
    /// Returns an error when `server` is not an absolute URL.
    pub fn from_server(server: &str) -> AppResult<Self> {
        let base = server.trim().trim_end_matches('/');
        Ok(Self {
            submit: join(base, SUBMIT_PATH)?,
            refresh: join(base, TOKEN_REFRESH_PATH)?,
        })
    }
}

fn join(base: &str, path: &str) -> AppResult<Url> {
    let raw = format!("{}{}", base, path);
    Url::parse(&raw).map_err(|err| {
        AppError::validation(ValidationError::InvalidServerUrl {
            url: base.to_owned(),
            source: err,
        })
    })
}
