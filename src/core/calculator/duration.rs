use crate::utils::time;
use chrono::NaiveDateTime;

/// Compact stay-duration label: whole minutes under an hour, hours to
/// one decimal under a day, days to one decimal from there on.
/// Integral values print without the trailing ".0" ("1h", not "1.0h").
pub fn format_duration_hours(hours: f64) -> String {
    if hours < 1.0 {
        format!("{}m", (hours * 60.0).round())
    } else if hours < 24.0 {
        format!("{}h", round_one_decimal(hours))
    } else {
        format!("{}d", round_one_decimal(hours / 24.0))
    }
}

/// Picks the duration input for a bar. Preference order: the room
/// line's precomputed hours, then the booking's, then the raw
/// timestamps. A present value is trusted as-is, including zero.
pub fn resolve_duration_hours(
    line_hours: Option<f64>,
    booking_hours: Option<f64>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> f64 {
    line_hours
        .or(booking_hours)
        .unwrap_or_else(|| time::hours_between(start, end))
}

fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
