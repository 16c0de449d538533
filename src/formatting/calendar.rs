use chrono::{NaiveDate, NaiveTime};

/// Long form of a match date, e.g. "Saturday, 16 August 2025".
/// Input that is not an ISO date is returned unchanged.
#[must_use]
pub fn format_match_date(date: &str) -> String {
    let day = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %-d %B %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Day and short month, e.g. "16 Aug", as on the results strip
#[must_use]
pub fn format_short_date(date: &str) -> String {
    let day = date.get(..10).unwrap_or(date);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_or_else(|_| date.to_string(), |d| d.format("%-d %b").to_string())
}

/// Kick-off time as "HH:MM"
#[must_use]
pub fn format_kickoff(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }
    NaiveTime::parse_from_str(time, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_or_else(|_| time.to_string(), |t| t.format("%H:%M").to_string())
}
