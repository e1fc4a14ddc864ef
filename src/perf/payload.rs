use chrono::{DateTime, SecondsFormat, SubsecRound, TimeDelta, Utc};

use crate::error::{AppError, AppResult, ValidationError};

use super::resolve::TestConfig;

/// Renders the SMPS body sent to the server.
///
/// `start` is truncated to whole seconds; `end_time` is exactly
/// `start_time + duration`.
///
/// # Errors
///
/// Returns an error when the end of the test window is not representable.
pub fn build_payload(config: &TestConfig, start: DateTime<Utc>) -> AppResult<String> {
    let start = start.trunc_subsecs(0);
    let end = TimeDelta::from_std(config.duration)
        .ok()
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;

    Ok(format!(
        "start_time: {}\nend_time: {}\nendpoint_url: {}\nclient:\n connections: {}\n rps: {}",
        start.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        end.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        config.url,
        config.concurrent_requests,
        config.qps,
    ))
}

/// Query parameters of the submission request; `mesh` only when set.
#[must_use]
pub fn submission_query(config: &TestConfig) -> Vec<(&'static str, &str)> {
    let mut query = vec![
        ("name", config.name.as_str()),
        ("loadGenerator", config.load_generator.as_str()),
    ];
    if let Some(mesh) = config.mesh.as_deref() {
        query.push(("mesh", mesh));
    }
    query
}
