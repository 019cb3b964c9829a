use chrono::{DateTime, Duration, Utc};

/// Results-table timestamp, minute precision.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Countdown as `MM:SS`; negative spans show as `00:00`.
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
