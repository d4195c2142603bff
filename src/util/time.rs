use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::AppError;

/// Shortest repeat interval a reminder may use.
pub const MIN_REPEAT_INTERVAL_SECS: i64 = 60;

/// Longest duration accepted anywhere, five years.
pub const MAX_DURATION_SECS: i64 = 5 * 365 * 24 * 3600;

/// Parses a compact duration such as `90s`, `12h`, `1d3h20m` or `2w 1d`.
///
/// Units are `w`, `d`, `h`, `m` and `s`. Whitespace between parts is ignored.
///
/// # Returns
/// - `Ok(i64)` - Total length in seconds, positive and at most `MAX_DURATION_SECS`
/// - `Err(AppError::BadRequest)` - Empty input, unknown unit, a zero-length or too long duration
pub fn parse_duration(input: &str) -> Result<i64, AppError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(AppError::BadRequest("Duration cannot be empty.".to_string()));
    }

    let mut total: i64 = 0;
    let mut digits = String::new();

    for c in compact.to_lowercase().chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let unit = match c {
            'w' => 7 * 24 * 3600,
            'd' => 24 * 3600,
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Unknown time unit '{}' in '{}'. Use w, d, h, m or s.",
                    c, input
                )))
            }
        };

        if digits.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Missing number before '{}' in '{}'.",
                c, input
            )));
        }
        let amount: i64 = digits.parse().map_err(|_| too_long(input))?;
        digits.clear();

        total = amount
            .checked_mul(unit)
            .and_then(|secs| total.checked_add(secs))
            .filter(|secs| *secs <= MAX_DURATION_SECS)
            .ok_or_else(|| too_long(input))?;
    }

    if !digits.is_empty() {
        return Err(AppError::BadRequest(format!(
            "'{}' is missing a unit at the end. Use w, d, h, m or s.",
            input
        )));
    }

    if total == 0 {
        return Err(AppError::BadRequest(
            "Duration must be longer than zero.".to_string(),
        ));
    }

    Ok(total)
}

/// Parses a repeat interval, enforcing the minimum of one minute.
pub fn parse_repeat_interval(input: &str) -> Result<i64, AppError> {
    let secs = parse_duration(input)?;
    if secs < MIN_REPEAT_INTERVAL_SECS {
        return Err(AppError::BadRequest(
            "Repeat interval must be at least 1 minute.".to_string(),
        ));
    }
    Ok(secs)
}

/// Resolves the `remind_on` argument of a reminder to a Unix timestamp.
///
/// Accepts a relative duration (`2h30m`), `MM/DD HH:MM`, or `YYYY-MM-DD HH:MM`. Absolute forms
/// are read in the user's timezone. A `MM/DD` date that already passed this year rolls over to
/// next year.
///
/// # Arguments
/// - `input` - Raw argument text
/// - `tz` - The user's stored timezone
/// - `now` - Current instant
///
/// # Returns
/// - `Ok(i64)` - Unix timestamp in seconds, strictly in the future
/// - `Err(AppError::BadRequest)` - Unparsable input or a time in the past
pub fn parse_remind_on(input: &str, tz: Tz, now: DateTime<Utc>) -> Result<i64, AppError> {
    let trimmed = input.trim();

    if let Ok(secs) = parse_duration(trimmed) {
        return now
            .timestamp()
            .checked_add(secs)
            .ok_or_else(|| too_long(trimmed));
    }

    let local_now = now.with_timezone(&tz);

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M") {
        let ts = localize(tz, naive, trimmed)?;
        if ts <= now.timestamp() {
            return Err(AppError::BadRequest(format!(
                "'{}' is in the past.",
                trimmed
            )));
        }
        return Ok(ts);
    }

    let (date_part, time_part) = trimmed.split_once(' ').ok_or_else(|| invalid_time(trimmed))?;
    let (month, day) = date_part.split_once('/').ok_or_else(|| invalid_time(trimmed))?;
    let month: u32 = month.parse().map_err(|_| invalid_time(trimmed))?;
    let day: u32 = day.parse().map_err(|_| invalid_time(trimmed))?;
    let time = NaiveTime::parse_from_str(time_part.trim(), "%H:%M")
        .map_err(|_| invalid_time(trimmed))?;

    for year in [local_now.year(), local_now.year() + 1] {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let ts = localize(tz, date.and_time(time), trimmed)?;
        if ts > now.timestamp() {
            return Ok(ts);
        }
    }

    Err(invalid_time(trimmed))
}

/// Parses an IANA timezone name such as `Asia/Manila`.
pub fn parse_timezone(name: &str) -> Result<Tz, AppError> {
    name.trim().parse::<Tz>().map_err(|_| {
        AppError::BadRequest(format!(
            "'{}' is not a valid timezone. Use a name like America/New_York.",
            name
        ))
    })
}

/// Renders a number of seconds as `1d 3h 20m`.
pub fn format_duration(secs: i64) -> String {
    let mut rest = secs.max(0);
    let mut parts = Vec::new();

    for (unit, label) in [(86400, "d"), (3600, "h"), (60, "m"), (1, "s")] {
        if rest >= unit {
            parts.push(format!("{}{}", rest / unit, label));
            rest %= unit;
        }
    }

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

fn localize(tz: Tz, naive: NaiveDateTime, raw: &str) -> Result<i64, AppError> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| {
            AppError::BadRequest(format!("'{}' does not exist in your timezone.", raw))
        })
}

fn too_long(raw: &str) -> AppError {
    AppError::BadRequest(format!(
        "Duration '{}' is too long. The limit is {}.",
        raw,
        format_duration(MAX_DURATION_SECS)
    ))
}

fn invalid_time(raw: &str) -> AppError {
    AppError::BadRequest(format!(
        "Could not read '{}'. Use a duration like 2h30m, or MM/DD HH:MM.",
        raw
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn parses_compound_durations() {
        assert_eq!(parse_duration("90s").unwrap(), 90);
        assert_eq!(parse_duration("1d3h20m").unwrap(), 86400 + 3 * 3600 + 20 * 60);
        assert_eq!(parse_duration("2w 1d").unwrap(), 15 * 86400);
    }

    #[test]
    fn rejects_bad_durations() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("12").is_err());
        assert!(parse_duration("3y").is_err());
        assert!(parse_duration("0m").is_err());
    }

    #[test]
    fn oversized_durations_are_rejected() {
        assert!(matches!(
            parse_duration("9223372036854775807s"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_duration("99999999999999999999w"),
            Err(AppError::BadRequest(_))
        ));
        assert!(parse_duration("261w").is_err());
        assert_eq!(parse_duration("260w").unwrap(), 260 * 7 * 86400);
    }

    #[test]
    fn relative_remind_on_rejects_values_past_the_limit() {
        let now = at("2026-03-01T12:00:00Z");

        let result = parse_remind_on("9223372036854775807s", chrono_tz::UTC, now);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn repeat_interval_must_be_at_least_a_minute() {
        assert!(parse_repeat_interval("30s").is_err());
        assert_eq!(parse_repeat_interval("1m").unwrap(), 60);
    }

    #[test]
    fn relative_remind_on_adds_to_now() {
        let now = at("2026-03-01T12:00:00Z");

        let ts = parse_remind_on("2h", chrono_tz::UTC, now).unwrap();

        assert_eq!(ts, now.timestamp() + 7200);
    }

    #[test]
    fn month_day_is_read_in_user_timezone() {
        let now = at("2026-03-01T12:00:00Z");

        let ts = parse_remind_on("03/02 08:00", chrono_tz::Asia::Manila, now).unwrap();

        // 08:00 in Manila (UTC+8) is midnight UTC
        assert_eq!(ts, at("2026-03-02T00:00:00Z").timestamp());
    }

    #[test]
    fn past_month_day_rolls_over_to_next_year() {
        let now = at("2026-03-01T12:00:00Z");

        let ts = parse_remind_on("01/15 09:00", chrono_tz::UTC, now).unwrap();

        assert_eq!(ts, at("2027-01-15T09:00:00Z").timestamp());
    }

    #[test]
    fn full_date_in_the_past_is_rejected() {
        let now = at("2026-03-01T12:00:00Z");

        let result = parse_remind_on("2025-12-31 23:00", chrono_tz::UTC, now);

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        assert!(parse_timezone("Mars/Olympus").is_err());
        assert_eq!(
            parse_timezone("America/New_York").unwrap(),
            chrono_tz::America::New_York
        );
    }

    #[test]
    fn formats_durations_compactly() {
        assert_eq!(format_duration(90061), "1d 1h 1m 1s");
        assert_eq!(format_duration(3600), "1h");
        assert_eq!(format_duration(0), "0s");
    }
}
