//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{Cli, Command, PerfArgs};
pub use types::{PositiveU64, Qps};

pub(crate) use defaults::{
    DEFAULT_CONCURRENT_REQUESTS, DEFAULT_DURATION, DEFAULT_LOAD_GENERATOR, DEFAULT_QPS,
    DEFAULT_USER_AGENT,
};
#[cfg(test)]
pub(crate) use defaults::{DEFAULT_SERVER_URL, default_token_path};
pub(crate) use parsers::{format_span, parse_span};
