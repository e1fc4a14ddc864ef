//! Requests to the Meshery server: test submission and token refresh.
mod client;
mod endpoints;
mod refresh;
mod submit;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::build_client;
pub use endpoints::{Endpoints, SUBMIT_PATH, TOKEN_REFRESH_PATH};
pub use refresh::refresh_token;
pub use submit::{SubmissionResponse, submit_test};
