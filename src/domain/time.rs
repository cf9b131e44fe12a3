use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::clock::Clock;
use super::duration::format_remaining;
use crate::errors::CountdownError;

/// Offset-less layouts accepted for end instants, read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Layouts carrying a numeric offset, `+03`, `+0300` or `+03:00`.
const ZONED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

fn parse_naive(text: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
}

/// Parse an ISO-8601 style end instant.
pub fn parse_instant(text: &str) -> Result<DateTime<Utc>, CountdownError> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    // `Z` with any precision RFC 3339 does not cover
    if let Some(local) = text.strip_suffix('Z').or_else(|| text.strip_suffix('z')) {
        if let Some(naive) = parse_naive(local) {
            return Ok(naive.and_utc());
        }
    }

    for layout in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, layout) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    if let Some(naive) = parse_naive(text) {
        return Ok(naive.and_utc());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CountdownError::invalid_end(text, "expected an ISO-8601 date-time"))
}

/// Remaining time from `now` until `end`, localized.
///
/// * `Ok(None)` — no end given, or the end has already passed.
/// * `Err(_)` — the end text is not a date-time.
pub fn time_remaining(
    end: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Option<String>, CountdownError> {
    let Some(text) = end.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let end = parse_instant(text)?;
    let diff = end.signed_duration_since(now);

    Ok(format_remaining(diff.num_milliseconds()))
}

/// Same as [`time_remaining`], reading "now" from `clock` once.
pub fn time_remaining_with<C: Clock>(
    end: Option<&str>,
    clock: &C,
) -> Result<Option<String>, CountdownError> {
    time_remaining(end, clock.now())
}
