use std::time::Duration;

use crate::error::{AppError, AppResult, ValidationError};

const NANOS_PER_SECOND: u64 = 1_000_000_000;
/// Fraction digits beyond nanosecond precision carry no information.
const MAX_FRACTION_DIGITS: usize = 9;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60_000_000_000),
        "h" => Some(3_600_000_000_000),
        _ => None,
    }
}

/// Parses a time span such as `30s`, `1.5h`, `1h30m` or `250ms`.
///
/// Every number needs a unit, except the bare literal `0`. Negative spans are
/// rejected since a test window can only move forward.
pub(crate) fn parse_span(s: &str) -> Result<Duration, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::DurationEmpty);
    }
    if value.starts_with('-') {
        return Err(ValidationError::NegativeDuration {
            value: value.to_owned(),
        });
    }
    let unsigned = value.strip_prefix('+').unwrap_or(value);
    if unsigned == "0" {
        return Ok(Duration::ZERO);
    }
    if unsigned.is_empty() {
        return Err(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        });
    }

    let mut rest = unsigned;
    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, fraction, after_number) = split_number(rest);
        if whole.is_empty() && fraction.is_empty() {
            return Err(ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            });
        }

        let unit_len = after_number
            .find(|ch: char| ch.is_ascii_digit() || ch == '.')
            .unwrap_or(after_number.len());
        let (unit, tail) = after_number.split_at(unit_len);
        if unit.is_empty() {
            return Err(ValidationError::MissingDurationUnit {
                value: value.to_owned(),
            });
        }
        let scale = unit_nanos(unit).ok_or_else(|| ValidationError::InvalidDurationUnit {
            unit: unit.to_owned(),
        })?;

        let component = component_nanos(value, whole, fraction, scale)?;
        total = total
            .checked_add(component)
            .ok_or(ValidationError::DurationOverflow)?;
        rest = tail;
    }

    Ok(Duration::from_nanos(total))
}

fn split_number(input: &str) -> (&str, &str, &str) {
    let whole_len = input
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(input.len());
    let (whole, after_whole) = input.split_at(whole_len);
    match after_whole.strip_prefix('.') {
        Some(tail) => {
            let fraction_len = tail
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(tail.len());
            let (fraction, after_fraction) = tail.split_at(fraction_len);
            (whole, fraction, after_fraction)
        }
        None => (whole, "", after_whole),
    }
}

fn component_nanos(
    value: &str,
    whole: &str,
    fraction: &str,
    scale: u64,
) -> Result<u64, ValidationError> {
    let whole_nanos = if whole.is_empty() {
        0
    } else {
        let number: u64 = whole
            .parse()
            .map_err(|err| ValidationError::InvalidDurationNumber {
                value: value.to_owned(),
                source: err,
            })?;
        number
            .checked_mul(scale)
            .ok_or(ValidationError::DurationOverflow)?
    };

    let digits = fraction.get(..MAX_FRACTION_DIGITS).unwrap_or(fraction);
    if digits.is_empty() {
        return Ok(whole_nanos);
    }
    let numerator: u64 = digits
        .parse()
        .map_err(|err| ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })?;
    let exponent = u32::try_from(digits.len()).map_err(|_err| ValidationError::DurationOverflow)?;
    let denominator = 10u64
        .checked_pow(exponent)
        .ok_or(ValidationError::DurationOverflow)?;
    let fraction_nanos = u128::from(numerator)
        .checked_mul(u128::from(scale))
        .and_then(|scaled| scaled.checked_div(u128::from(denominator)))
        .and_then(|nanos| u64::try_from(nanos).ok())
        .ok_or(ValidationError::DurationOverflow)?;

    whole_nanos
        .checked_add(fraction_nanos)
        .ok_or(ValidationError::DurationOverflow)
}

/// Renders a span in seconds (`30s`, `1.5s`) so it parses back through
/// [`parse_span`].
pub(crate) fn format_span(span: Duration) -> String {
    let nanos = format!("{:09}", span.subsec_nanos());
    let fraction = nanos.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}s", span.as_secs())
    } else {
        format!("{}.{}s", span.as_secs(), fraction)
    }
}

/// Strictly positive span, used for timeouts and config durations.
pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let duration = parse_span(s).map_err(AppError::validation)?;
    if duration.is_zero() {
        return Err(AppError::validation(ValidationError::DurationZero));
    }
    Ok(duration)
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}
