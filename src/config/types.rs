use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_span;
use crate::error::ValidationError;

/// Persistent defaults for the `perf` subcommand. Test parameters themselves
/// come from flags or the SMPS file, never from here.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub server: Option<String>,
    pub token: Option<String>,
    pub mesh: Option<String>,
    pub connect_timeout: Option<DurationValue>,
    pub request_timeout: Option<DurationValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(0) => Err(ValidationError::DurationZero),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => {
                let duration = parse_span(text)?;
                if duration.is_zero() {
                    return Err(ValidationError::DurationZero);
                }
                Ok(duration)
            }
        }
    }
}
