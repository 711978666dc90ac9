//! # Activity duration
//!
//! Parser for duration literals used in activity records, e.g. `45m`,
//! `1h30m` or `1.5h`.
//!
//! Grammar:
//!
//! ```notrust
//! duration = [sign] ( "0" | ( number unit )+ )
//! sign     = "+" | "-"
//! number   = digits [ "." [ digits ] ] | "." digits
//! unit     = "ns" | "us" | "µs" | "μs" | "ms" | "s" | "m" | "h"
//! ```
//!
//! Where:
//!
//! - `digits` - one or more ASCII decimal digits
//! - `µs` / `μs` - micro sign (U+00B5) and greek mu (U+03BC) are both accepted
//!
//! Magnitude is limited to what fits into `i64` nanoseconds (about 292 years).
//! Zero and negative literals are valid durations, range checks are up to the caller.

use thiserror::Error;
use time::Duration;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1000 * NANOSECOND;
const MILLISECOND: u64 = 1000 * MICROSECOND;
const SECOND: u64 = 1000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Magnitude of `i64::MIN` in nanoseconds
const MAX_NANOS: u64 = 1 << 63;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        // U+00B5 and U+03BC
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

fn digits_len(s: &str) -> usize {
    s.bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len())
}

/// Consumes leading digits. Returns `None` if value doesn't fit into duration range.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let (digits, rest) = s.split_at(digits_len(s));

    let value = digits.bytes().try_fold(0_u64, |acc, digit| {
        acc.checked_mul(10)?
            .checked_add(u64::from(digit - b'0'))
            .filter(|value| *value <= MAX_NANOS)
    })?;

    Some((value, rest))
}

/// Consumes fractional digits after the dot.
///
/// Digits which would overflow are consumed but ignored, so the result
/// is `value / scale` truncated to available precision.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let (digits, rest) = s.split_at(digits_len(s));

    let mut value = 0_u64;
    let mut scale = 1.0;

    for digit in digits.bytes() {
        match value
            .checked_mul(10)
            .and_then(|this| this.checked_add(u64::from(digit - b'0')))
        {
            Some(next) if next < MAX_NANOS => {
                value = next;
                scale *= 10.0;
            }
            _ => break,
        }
    }

    (value, scale, rest)
}

/// Parse duration literal like `1h30m` into signed [`Duration`].
///
/// Input should be already trimmed, whitespace is treated as an invalid character.
pub fn parse(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_owned());
    let overflow = || DurationError::Overflow(input.to_owned());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }

    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total = 0_u64;

    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid());
        }

        let (whole, after_whole) = leading_int(rest).ok_or_else(invalid)?;
        let has_whole = after_whole.len() != rest.len();
        rest = after_whole;

        let (fraction, scale, has_fraction) = match rest.strip_prefix('.') {
            Some(after_dot) => {
                let (fraction, scale, after_fraction) = leading_fraction(after_dot);
                let has_fraction = after_fraction.len() != after_dot.len();
                rest = after_fraction;

                (fraction, scale, has_fraction)
            }
            None => (0, 1.0, false),
        };

        if !has_whole && !has_fraction {
            return Err(invalid());
        }

        let unit_end = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (unit, after_unit) = rest.split_at(unit_end);
        rest = after_unit;

        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_owned()));
        }

        let unit = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_owned(),
            input: input.to_owned(),
        })?;

        if whole > MAX_NANOS / unit {
            return Err(overflow());
        }

        let mut value = whole * unit;

        if fraction > 0 {
            // Truncation towards zero is intended, sub-nanosecond part is dropped
            value += (fraction as f64 * (unit as f64 / scale)) as u64;

            if value > MAX_NANOS {
                return Err(overflow());
            }
        }

        total = total
            .checked_add(value)
            .filter(|total| *total <= MAX_NANOS)
            .ok_or_else(overflow)?;
    }

    let nanos = match negative {
        true => -i128::from(total),
        false => i128::from(total),
    };

    Ok(Duration::nanoseconds(
        i64::try_from(nanos).map_err(|_| overflow())?,
    ))
}
