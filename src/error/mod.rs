mod app;
mod auth;
mod config;
mod http;
mod spec;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use auth::AuthError;
pub use config::ConfigError;
pub use http::HttpError;
pub use spec::SpecError;
pub use validation::ValidationError;
