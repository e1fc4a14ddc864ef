//! Meshery auth token file handling.
mod token;


pub use token::{AuthToken, PROVIDER_COOKIE, TOKEN_COOKIE, write_token_file};
