//! Schedule time parsing and duration rendering.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// Wire format for match schedule times, e.g. `2014-01-21 11:36:52`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a schedule time string into a UTC instant.
pub fn parse_time(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, TIME_FORMAT).map(|naive| naive.and_utc())
}

/// Render a duration as its leading nonzero unit followed by every smaller
/// unit, e.g. `20 days, 11 hours, 36 minutes, 52 seconds`.
///
/// Seconds are always included. Negative durations render their absolute
/// value; callers decide whether the phrase reads "in ..." or "... ago".
pub fn format_duration(duration: Duration) -> String {
    let mut secs = duration.num_seconds();
    if secs < 0 {
        secs = -secs;
    }
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(unit(days, "day"));
    }
    if !parts.is_empty() || hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if !parts.is_empty() || minutes > 0 {
        parts.push(unit(minutes, "minute"));
    }
    parts.push(unit(seconds, "second"));
    parts.join(", ")
}

fn unit(count: i64, name: &str) -> String {
    if count == 1 {
        format!("1 {name}")
    } else {
        format!("{count} {name}s")
    }
}
