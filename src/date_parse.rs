//! Publish-date normalization.
//!
//! Turns the free-text date found by [`crate::date`] into a UTC timestamp.
//! Supported inputs:
//!
//! - RFC 3339 (`2024-03-15T10:30:00Z`)
//! - numeric dates with `-`, `/` or `.` separators, optionally followed by
//!   `HH:MM[:SS]`; two-digit years are read as 20YY
//! - CJK calendar dates (`2024年3月15日 10:30`)
//! - relative CJK phrases (`3小时前`, `半天前`, `昨天 08:30`), only when a
//!   reference time is supplied
//!
//! Times are taken as UTC; the page's own time zone is unknown.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::patterns::{ABSOLUTE_DATE, DAY_NAME_DATE, RELATIVE_DATE};

fn unrecognized(text: &str) -> Error {
    Error::UnrecognizedDate(text.to_string())
}

fn parse_number(digits: Option<regex::Match>) -> Option<u32> {
    digits.and_then(|m| m.as_str().parse().ok())
}

/// Parse an absolute date anywhere inside `text`.
fn parse_absolute(text: &str) -> Option<DateTime<Utc>> {
    let caps = ABSOLUTE_DATE.captures(text)?;

    let year_digits = caps.get(1)?.as_str();
    let mut year: i32 = year_digits.parse().ok()?;
    if year_digits.len() == 2 {
        year += 2000;
    }
    let month = parse_number(caps.get(2))?;
    let day = parse_number(caps.get(3))?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let time = match parse_number(caps.get(4)) {
        Some(hour) => {
            let minute = parse_number(caps.get(5))?;
            let second = parse_number(caps.get(6)).unwrap_or(0);
            NaiveTime::from_hms_opt(hour, minute, second)?
        }
        None => NaiveTime::from_hms_opt(0, 0, 0)?,
    };

    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

/// Parse `N单位前` relative to `now`.
fn parse_relative(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = RELATIVE_DATE.captures(text)?;
    let amount = caps.get(1)?.as_str();
    let unit = caps.get(2)?.as_str();

    // 半 is "half" of the unit.
    let (count, half) = if amount == "半" {
        (0, true)
    } else {
        (amount.parse::<i64>().ok()?, false)
    };

    let unit_seconds: i64 = match unit {
        "秒" => 1,
        "分" | "分钟" => 60,
        "小时" | "个小时" => 3_600,
        "天" | "日" => 86_400,
        _ => return None,
    };
    let seconds = if half {
        unit_seconds / 2
    } else {
        count.checked_mul(unit_seconds)?
    };

    now.checked_sub_signed(Duration::try_seconds(seconds)?)
}

/// Parse `昨天` / `前天` / `今天` with an optional clock time.
fn parse_day_name(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = DAY_NAME_DATE.captures(text)?;
    let days_back = match caps.get(1)?.as_str() {
        "今天" => 0,
        "昨天" => 1,
        "前天" => 2,
        _ => return None,
    };

    let day = now.date_naive().checked_sub_days(chrono::Days::new(days_back))?;
    let time = match parse_number(caps.get(2)) {
        Some(hour) => NaiveTime::from_hms_opt(hour, parse_number(caps.get(3))?, 0)?,
        None => NaiveTime::from_hms_opt(0, 0, 0)?,
    };

    Some(Utc.from_utc_datetime(&day.and_time(time)))
}

/// Normalize a free-text publish date.
///
/// `reference_time` anchors relative phrases; without it they are rejected.
pub fn parse_pub_date(text: &str, reference_time: Option<DateTime<Utc>>) -> Result<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(unrecognized(text));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(dt) = parse_absolute(text) {
        return Ok(dt);
    }

    if let Some(now) = reference_time {
        if let Some(dt) = parse_relative(text, now).or_else(|| parse_day_name(text, now)) {
            return Ok(dt);
        }
    }

    Err(unrecognized(text))
}
