//! Human readable time distances, after Rails' `distance_of_time_in_words`.

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const MINUTES_IN_YEAR: i64 = 525_600;
pub const MINUTES_IN_QUARTER_YEAR: i64 = 131_400;
pub const MINUTES_IN_THREE_QUARTERS_YEAR: i64 = 394_200;

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;

/// Describe roughly how far apart two points in time are.
///
/// The order of the arguments does not matter. With `include_seconds`,
/// distances under two minutes are reported in finer steps.
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use stdx::timex::distance_of_time_in_words;
///
/// let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(distance_of_time_in_words(from, from + Duration::minutes(30), false), "30 minutes");
/// assert_eq!(distance_of_time_in_words(from, from + Duration::seconds(15), true), "less than 20 seconds");
/// assert_eq!(distance_of_time_in_words(from, from + Duration::days(400), false), "about 1 year");
/// ```
pub fn distance_of_time_in_words<Tz: TimeZone>(
    from: DateTime<Tz>,
    to: DateTime<Tz>,
    include_seconds: bool,
) -> String {
    let (from, to) = if from > to { (to, from) } else { (from, to) };
    let seconds = to.timestamp() - from.timestamp();
    let minutes = seconds / 60;

    match minutes {
        0..=1 if !include_seconds => "less than a minute".to_string(),
        0..=1 => match seconds {
            0..=4 => "less than 5 seconds".to_string(),
            5..=9 => "less than 10 seconds".to_string(),
            10..=19 => "less than 20 seconds".to_string(),
            // Rails range, 20 through 39 seconds
            20..=39 => "half a minute".to_string(),
            40..=59 => "less than a minute".to_string(),
            _ => "1 minute".to_string(),
        },
        2..=45 => format!("{minutes} minutes"),
        46..=90 => "about an hour".to_string(),
        // counts of one stay singular: "about 1 hour"
        91..=1440 => format!("about {}", pluralize(minutes / 60, "hour")),
        1441..=2520 => "about a day".to_string(),
        2521..=43_200 => format!("about {}", pluralize(minutes / MINUTES_IN_DAY, "day")),
        43_201..=86_400 => format!("about {}", pluralize(minutes / MINUTES_IN_MONTH, "month")),
        86_401..=MINUTES_IN_YEAR => pluralize(minutes / MINUTES_IN_MONTH, "month"),
        _ => {
            let leap_days = leap_years_between(&from, &to) * MINUTES_IN_DAY;
            let minutes = minutes - leap_days;
            let years = minutes / MINUTES_IN_YEAR;
            let remainder = minutes % MINUTES_IN_YEAR;

            if remainder < MINUTES_IN_QUARTER_YEAR {
                format!("about {}", pluralize(years, "year"))
            } else if remainder < MINUTES_IN_THREE_QUARTERS_YEAR {
                format!("over {}", pluralize(years, "year"))
            } else {
                pluralize(years + 1, "year")
            }
        }
    }
}

/// [`distance_of_time_in_words`] from `from` until now.
pub fn time_ago_in_words<Tz: TimeZone>(from: DateTime<Tz>, include_seconds: bool) -> String {
    let now = Utc::now().with_timezone(&from.timezone());
    distance_of_time_in_words(from, now, include_seconds)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Whether `time` lies strictly between `start` and `end`.
pub fn within<Tz: TimeZone>(time: &DateTime<Tz>, start: &DateTime<Tz>, end: &DateTime<Tz>) -> bool {
    time > start && time < end
}

/// Leap days that fall between `from` and `to` (with `from <= to`).
fn leap_years_between<Tz: TimeZone>(from: &DateTime<Tz>, to: &DateTime<Tz>) -> i64 {
    let mut from_year = from.year();
    if from.month() >= 3 {
        from_year += 1;
    }
    let mut to_year = to.year();
    if to.month() < 3 {
        to_year -= 1;
    }

    (from_year..=to_year).filter(|&year| is_leap_year(year)).count() as i64
}

fn pluralize(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Parse a timestamp given on the command line.
///
/// Accepts, in order: RFC 3339, ISO 8601 without a zone (taken as UTC, with
/// or without fractional seconds), a bare date (midnight UTC) and integer Unix
/// seconds.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    if let Ok(nd) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = nd.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt));
        }
    }

    if let Ok(secs) = s.parse::<i64>() {
        if let Some(dt) = DateTime::from_timestamp(secs, 0) {
            return Ok(dt);
        }
    }

    Err(Error::InvalidTimestamp(s.to_string()))
}
