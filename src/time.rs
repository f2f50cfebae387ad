//! Time helpers.

use chrono::{DateTime, Datelike, Duration, Utc};

/// A timestamp as reported by Steam.
pub type ServerTime = DateTime<Utc>;

/// Converts a unix timestamp in seconds to a [`ServerTime`].
pub fn timestamp_to_server_time(timestamp: i64) -> Option<ServerTime> {
    DateTime::from_timestamp(timestamp, 0)
}

/// The current time.
pub fn get_server_time_now() -> ServerTime {
    Utc::now()
}

/// Formats the distance between `time` and `now` in the largest whole unit, e.g. "3 days ago"
/// or "in 2 hours". Anything under a minute is "just now".
pub fn format_relative(time: ServerTime, now: ServerTime) -> String {
    let delta = now.signed_duration_since(time);
    let past = delta >= Duration::zero();
    let seconds = delta.num_seconds().unsigned_abs();
    let (amount, unit) = match seconds {
        0..=59 => return "just now".into(),
        60..=3_599 => (seconds / 60, "minute"),
        3_600..=86_399 => (seconds / 3_600, "hour"),
        86_400..=604_799 => (seconds / 86_400, "day"),
        604_800..=2_629_799 => (seconds / 604_800, "week"),
        2_629_800..=31_557_599 => (seconds / 2_629_800, "month"),
        _ => (seconds / 31_557_600, "year"),
    };
    let plural = if amount == 1 { "" } else { "s" };

    if past {
        format!("{amount} {unit}{plural} ago")
    } else {
        format!("in {amount} {unit}{plural}")
    }
}

/// The number of whole calendar years and months from `start` to `end`.
pub fn years_and_months_between(start: ServerTime, end: ServerTime) -> (u32, u32) {
    if end <= start {
        return (0, 0);
    }

    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;

    // the last month is not complete yet
    if (end.day(), end.time()) < (start.day(), start.time()) {
        months -= 1;
    }

    let months = months.max(0) as u32;

    (months / 12, months % 12)
}

/// Formats the time elapsed from `start` to `now` in calendar units, e.g. "3 years and 2 months",
/// "5 months" or "12 days".
pub fn format_elapsed(start: ServerTime, now: ServerTime) -> String {
    fn plural(amount: i64, unit: &str) -> String {
        if amount == 1 {
            format!("{amount} {unit}")
        } else {
            format!("{amount} {unit}s")
        }
    }

    match years_and_months_between(start, now) {
        (0, 0) => plural(now.signed_duration_since(start).num_days().max(0), "day"),
        (0, months) => plural(months.into(), "month"),
        (years, 0) => plural(years.into(), "year"),
        (years, months) => format!("{} and {}", plural(years.into(), "year"), plural(months.into(), "month")),
    }
}
