use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Missing unit in duration '{value}'.")]
    MissingDurationUnit { value: String },
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration '{value}' must not be negative.")]
    NegativeDuration { value: String },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Test duration invalid: {source}")]
    InvalidDuration {
        #[source]
        source: Box<ValidationError>,
    },
    #[error("Please enter a test URL (set --url or endpoint_url in the SMPS file).")]
    MissingUrl,
    #[error("Please enter a valid test URL: '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Please enter a valid test URL: '{url}' is missing a host.")]
    UrlMissingHost { url: String },
    #[error("Invalid server URL '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid concurrent requests '{value}': {source}")]
    InvalidConcurrentRequests {
        value: String,
        #[source]
        source: Box<ValidationError>,
    },
    #[error("Invalid qps '{value}'. Expected a non-negative number.")]
    InvalidQps { value: String },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
