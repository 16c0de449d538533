mod calendar;
mod relative;

pub use calendar::{format_kickoff, format_match_date, format_short_date};
pub use relative::format_relative;
