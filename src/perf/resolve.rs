use std::path::Path;
use std::time::Duration;

use rand::Rng;
use url::Url;

use crate::args::{
    DEFAULT_CONCURRENT_REQUESTS, DEFAULT_DURATION, DEFAULT_LOAD_GENERATOR, DEFAULT_QPS, PerfArgs,
    PositiveU64, Qps, parse_span,
};
use crate::error::{AppError, AppResult, ValidationError};
use crate::smps::{PerformanceSpec, load_spec};

use super::name::random_test_name;

/// Fully validated parameters of one test submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TestConfig {
    pub name: String,
    pub url: String,
    pub mesh: Option<String>,
    pub duration: Duration,
    pub concurrent_requests: PositiveU64,
    pub qps: Qps,
    pub load_generator: String,
}

/// Parameter strings after flag/spec/default precedence, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameters {
    pub name: String,
    pub url: String,
    pub mesh: Option<String>,
    pub duration: String,
    pub concurrent_requests: String,
    pub qps: String,
    pub load_generator: String,
}

/// Loads the `--file` spec, if any. A spec that cannot be read or parsed is
/// reported and skipped.
#[must_use]
pub fn load_spec_overlay(args: &PerfArgs) -> Option<PerformanceSpec> {
    let path = args.file.as_deref().filter(|path| !path.is_empty())?;
    match load_spec(Path::new(path)) {
        Ok(spec) => {
            tracing::debug!("Loaded SMPS spec from {}", path);
            Some(spec)
        }
        Err(err) => {
            tracing::warn!("Error: {}. Continuing with command-line values.", err);
            None
        }
    }
}

/// Resolves and validates the test parameters.
///
/// # Errors
///
/// Returns an error when the duration, URL, concurrency or qps is invalid.
pub fn resolve_test_config<R: Rng + ?Sized>(
    args: &PerfArgs,
    spec: Option<&PerformanceSpec>,
    rng: &mut R,
) -> AppResult<TestConfig> {
    ResolvedParameters::resolve(args, spec, rng).validate()
}

impl ResolvedParameters {
    /// Applies precedence: a non-empty flag wins, then the SMPS file, then the
    /// built-in default. A flag given explicitly as an empty string falls back
    /// to the SMPS file but never to the default.
    pub fn resolve<R: Rng + ?Sized>(
        args: &PerfArgs,
        spec: Option<&PerformanceSpec>,
        rng: &mut R,
    ) -> Self {
        let duration = pick(
            args.duration.as_deref(),
            spec.and_then(PerformanceSpec::duration_text),
            DEFAULT_DURATION,
        );
        let url = pick(
            args.url.as_deref(),
            spec.and_then(PerformanceSpec::endpoint_url).map(str::to_owned),
            "",
        );
        let concurrent_requests = pick(
            args.concurrent_requests.as_deref(),
            spec.and_then(PerformanceSpec::connections_text),
            DEFAULT_CONCURRENT_REQUESTS,
        );
        let qps = pick(
            args.qps.as_deref(),
            spec.and_then(PerformanceSpec::rps_text),
            DEFAULT_QPS,
        );
        let load_generator = pick(
            args.load_generator.as_deref(),
            spec.and_then(PerformanceSpec::load_generator)
                .map(str::to_owned),
            DEFAULT_LOAD_GENERATOR,
        );

        let name = match non_empty(args.name.as_deref()) {
            Some(name) => name.to_owned(),
            None => {
                tracing::info!("Test Name not provided");
                let generated = random_test_name(rng);
                tracing::info!("Using random test name: {}", generated);
                generated
            }
        };

        Self {
            name,
            url,
            mesh: non_empty(args.mesh.as_deref()).map(str::to_owned),
            duration,
            concurrent_requests,
            qps,
            load_generator,
        }
    }

    /// Validates duration, URL, concurrency and qps, in that order.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(self) -> AppResult<TestConfig> {
        let duration = validate_duration(&self.duration)?;
        let url = validate_url(&self.url)?;
        let concurrent_requests = self
            .concurrent_requests
            .parse::<PositiveU64>()
            .map_err(|err| {
                AppError::validation(ValidationError::InvalidConcurrentRequests {
                    value: self.concurrent_requests.clone(),
                    source: Box::new(err),
                })
            })?;
        let qps = self.qps.parse::<Qps>().map_err(AppError::validation)?;

        Ok(TestConfig {
            name: self.name,
            url,
            mesh: self.mesh,
            duration,
            concurrent_requests,
            qps,
            load_generator: self.load_generator,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn pick(flag: Option<&str>, from_spec: Option<String>, default: &str) -> String {
    if let Some(value) = non_empty(flag) {
        return value.to_owned();
    }
    match (from_spec, flag) {
        (Some(value), _) => value,
        (None, Some(explicit)) => explicit.trim().to_owned(),
        (None, None) => default.to_owned(),
    }
}

fn validate_duration(value: &str) -> AppResult<Duration> {
    let invalid = |source: ValidationError| {
        AppError::validation(ValidationError::InvalidDuration {
            source: Box::new(source),
        })
    };
    let duration = parse_span(value).map_err(invalid)?;
    if duration.is_zero() {
        return Err(invalid(ValidationError::DurationZero));
    }
    Ok(duration)
}

/// Returns the URL to send. A URL without a scheme is taken as `http://`.
fn validate_url(value: &str) -> AppResult<String> {
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::MissingUrl));
    }
    let invalid = |err: url::ParseError| {
        AppError::validation(ValidationError::InvalidUrl {
            url: value.to_owned(),
            source: err,
        })
    };
    // `host:port/path` parses as a scheme, so anything without `://` and
    // without a host gets a second chance as http.
    let url = match Url::parse(value) {
        Ok(url) if has_host(&url) => return Ok(value.to_owned()),
        Err(err) if value.contains("://") => return Err(invalid(err)),
        Ok(_) if value.contains("://") => {
            return Err(AppError::validation(ValidationError::UrlMissingHost {
                url: value.to_owned(),
            }));
        }
        Ok(_) | Err(_) => Url::parse(&format!("http://{}", value)).map_err(invalid)?,
    };
    if !has_host(&url) {
        return Err(AppError::validation(ValidationError::UrlMissingHost {
            url: value.to_owned(),
        }));
    }
    tracing::debug!("No scheme in '{}', using {}", value, url);
    Ok(url.into())
}

fn has_host(url: &Url) -> bool {
    url.host_str().is_some_and(|host| !host.is_empty())
}
