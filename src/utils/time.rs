//! Time utilities: clock arithmetic, day-fraction offsets, timestamp parsing.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Minutes in a full day, the denominator of every intra-day offset.
pub const MINUTES_PER_DAY: u32 = 1440;

pub fn minutes_since_midnight(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

/// Converts minutes since midnight into percent of a 24-hour day.
/// 0 → 0.0, 720 → 50.0, 1440 → 100.0.
pub fn day_fraction_percent(minutes: u32) -> f64 {
    minutes as f64 / MINUTES_PER_DAY as f64 * 100.0
}

pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let duration = end - start;
    duration.num_seconds() as f64 / 3600.0
}

pub fn format_clock(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

/// Parses a booking timestamp. The upstream API emits
/// "YYYY-MM-DD HH:MM:SS"; the ISO "T" separator is accepted too.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let normalized = s.trim().replace('T', " ");
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}
