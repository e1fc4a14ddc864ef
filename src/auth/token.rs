use std::io::Write;
use std::path::Path;

use http::HeaderValue;
use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::error::AuthError;

pub const TOKEN_COOKIE: &str = "token";
pub const PROVIDER_COOKIE: &str = "meshery-provider";

/// Contents of the auth file. Keys other than the two cookies are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthToken {
    pub token: String,
    #[serde(rename = "meshery-provider")]
    pub provider: String,
}

impl AuthToken {
    /// Reads and parses the token file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing, unreadable, or not a JSON
    /// object carrying both cookie values as strings.
    pub fn load(path: &Path) -> Result<Self, AuthError> {
        let content = std::fs::read(path).map_err(|err| AuthError::ReadTokenFile {
            path: path.to_path_buf(),
            source: err,
        })?;
        serde_json::from_slice(&content).map_err(|err| AuthError::ParseTokenFile {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// `Cookie` header carrying both the session token and the provider.
    ///
    /// # Errors
    ///
    /// Returns an error when a value holds bytes outside the cookie-octet set.
    pub fn cookie_header(&self) -> Result<HeaderValue, AuthError> {
        ensure_cookie_value(TOKEN_COOKIE, &self.token)?;
        ensure_cookie_value(PROVIDER_COOKIE, &self.provider)?;
        let header = format!(
            "{}={}; {}={}",
            TOKEN_COOKIE, self.token, PROVIDER_COOKIE, self.provider
        );
        HeaderValue::from_str(&header).map_err(|_err| AuthError::InvalidCookieValue {
            cookie: TOKEN_COOKIE,
        })
    }
}

// RFC 6265 cookie-octet: no controls, whitespace, DQUOTE, comma, semicolon or backslash.
const fn is_cookie_octet(byte: u8) -> bool {
    matches!(byte, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

fn ensure_cookie_value(cookie: &'static str, value: &str) -> Result<(), AuthError> {
    if value.bytes().all(is_cookie_octet) {
        Ok(())
    } else {
        Err(AuthError::InvalidCookieValue { cookie })
    }
}

/// Replaces the token file with `content` verbatim.
///
/// The new contents go to a temporary file next to `path` that is then
/// renamed over it, so a failed write leaves the old token in place.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn write_token_file(path: &Path, content: &[u8]) -> Result<(), AuthError> {
    let write_error = |err: std::io::Error| AuthError::WriteTokenFile {
        path: path.to_path_buf(),
        source: err,
    };
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = NamedTempFile::new_in(dir).map_err(write_error)?;
    staged.write_all(content).map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    staged
        .persist(path)
        .map_err(|err| write_error(err.error))?;
    Ok(())
}
