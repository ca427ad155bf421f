use std::{str::FromStr, time::Duration};

use crate::{DurationErrorReason, Error, Result};

const NANOS_PER_HOUR: u128 = 60 * 60 * 1_000_000_000;
const NANOS_PER_DAY: u128 = 24 * NANOS_PER_HOUR;

// fractions beyond this many digits cannot move a nanosecond count
const MAX_FRACTION_DIGITS: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
enum Unit {
    #[strum(serialize = "ns")]
    Nanosecond,
    #[strum(serialize = "us", serialize = "µs", serialize = "μs")]
    Microsecond,
    #[strum(serialize = "ms")]
    Millisecond,
    #[strum(serialize = "s")]
    Second,
    #[strum(serialize = "m")]
    Minute,
    #[strum(serialize = "h")]
    Hour,
    #[strum(serialize = "d")]
    Day,
    #[strum(serialize = "w")]
    Week,
    #[strum(serialize = "mo", serialize = "M")]
    Month,
}

impl Unit {
    fn nanos(self) -> u128 {
        match self {
            Unit::Nanosecond => 1,
            Unit::Microsecond => 1_000,
            Unit::Millisecond => 1_000_000,
            Unit::Second => 1_000_000_000,
            Unit::Minute => 60 * 1_000_000_000,
            Unit::Hour => NANOS_PER_HOUR,
            Unit::Day => NANOS_PER_DAY,
            Unit::Week => 7 * NANOS_PER_DAY,
            Unit::Month => 30 * NANOS_PER_DAY,
        }
    }
}

/// Parses a human friendly duration.
///
/// Accepts Go-style durations (`15m`, `1h30m`, `1.5s`, `250ms`) and the approximations `d` (a day), `w` (a
/// week) and `mo` or `M` (30 days), fractions included. Components may be chained (`1d12h`) and a lone `0`
/// needs no unit.
///
/// ```
/// # use std::time::Duration;
/// # use headerfan::util::parse_duration;
/// assert_eq!(Duration::from_secs(36 * 60 * 60), parse_duration("1.5d").unwrap());
/// assert_eq!(Duration::from_secs(90 * 60), parse_duration("1h30m").unwrap());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration> {
    let fail = |reason| Error::duration(input, reason);

    let mut rest = match input.strip_prefix('+') {
        Some(rest) => rest,
        None if input.starts_with('-') => return Err(fail(DurationErrorReason::Negative)),
        None => input,
    };
    if rest.is_empty() {
        return Err(fail(DurationErrorReason::Empty));
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_end);
        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);

        if unit.is_empty() {
            return Err(fail(DurationErrorReason::MissingUnit));
        }
        let unit = Unit::from_str(unit).map_err(|_| fail(DurationErrorReason::UnknownUnit))?;
        let nanos = component_nanos(number, unit).map_err(fail)?;
        total = total
            .checked_add(nanos)
            .ok_or_else(|| fail(DurationErrorReason::Overflow))?;
        rest = tail;
    }

    let nanos = u64::try_from(total).map_err(|_| fail(DurationErrorReason::Overflow))?;
    Ok(Duration::from_nanos(nanos))
}

fn component_nanos(number: &str, unit: Unit) -> Result<u128, DurationErrorReason> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return Err(DurationErrorReason::Number);
    }

    let mut nanos = 0u128;
    if !whole.is_empty() {
        nanos = whole
            .parse::<u128>()
            .ok()
            .and_then(|whole| whole.checked_mul(unit.nanos()))
            .ok_or(DurationErrorReason::Overflow)?;
    }

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let numerator = fraction
            .parse::<u128>()
            .map_err(|_| DurationErrorReason::Number)?;
        let scale = 10u128.pow(fraction.len() as u32);
        nanos = nanos
            .checked_add(numerator * unit.nanos() / scale)
            .ok_or(DurationErrorReason::Overflow)?;
    }
    Ok(nanos)
}
