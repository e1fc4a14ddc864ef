use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::PerfArgs;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Flags given on the command line or through their environment variable
/// are never overridden by the config file.
fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

/// Applies config values to `args` for every flag not set explicitly.
///
/// # Errors
///
/// Returns an error when a configured timeout is not a valid duration.
pub fn apply_config(
    args: &mut PerfArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "server")
        && let Some(server) = config.server.clone()
    {
        args.server = server;
    }

    if !is_explicit(matches, "token")
        && let Some(token) = config.token.clone()
    {
        args.token = token;
    }

    if !is_explicit(matches, "mesh")
        && let Some(mesh) = config.mesh.clone()
    {
        args.mesh = Some(mesh);
    }

    if !is_explicit(matches, "connect_timeout")
        && let Some(value) = config.connect_timeout.as_ref()
    {
        args.connect_timeout = config_duration(value, "connect_timeout")?;
    }

    if !is_explicit(matches, "request_timeout")
        && let Some(value) = config.request_timeout.as_ref()
    {
        args.request_timeout = config_duration(value, "request_timeout")?;
    }

    Ok(())
}

fn config_duration(value: &DurationValue, field: &'static str) -> AppResult<std::time::Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}
