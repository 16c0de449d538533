use chrono::{DateTime, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Coarse "time ago" label for `timestamp` as seen at `now`.
/// Timestamps in the future read as "Just now".
#[must_use]
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // num_minutes truncates toward zero, which floors for non-negative deltas
    let minutes = (now - timestamp).num_minutes().max(0);

    match minutes {
        m if m < 1 => String::from("Just now"),
        m if m < MINUTES_PER_HOUR => format!("{m} mins ago"),
        m if m < MINUTES_PER_DAY => format!("{} hrs ago", m / MINUTES_PER_HOUR),
        m => format!("{} days ago", m / MINUTES_PER_DAY),
    }
}
