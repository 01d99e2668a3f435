use crate::errors::{AppError, AppResult};
use crate::models::booking::StayInterval;
use crate::models::month::MonthFrame;
use crate::utils::time;
use chrono::Datelike;
use serde::Serialize;

/// Rendering floor: every bar keeps at least 2% of the frame width so
/// short stays stay visible and clickable. Geometry only, never fed
/// back into any duration.
pub const MIN_BAR_WIDTH_PERCENT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarLayout {
    pub left: f64,
    pub width: f64,
    pub start_day: u32, // 1-based day of month
    pub end_day: u32,
    pub start_offset_percent: f64, // intra-day position, percent of 24h
    pub end_offset_percent: f64,
}

/// Maps a stay onto the month grid: fractional left edge plus a width
/// proportional to real elapsed time, not to whole days touched.
pub fn compute_layout(stay: &StayInterval, frame: &MonthFrame) -> AppResult<BarLayout> {
    stay.validate()?;

    if frame.total_days == 0 {
        return Err(AppError::InvalidFrame(format!(
            "month {} has no days",
            frame.label()
        )));
    }

    // -----------------------------
    // Resolve intra-day offsets
    // -----------------------------
    let (in_h, in_m) = stay.resolved_check_in();
    let (out_h, out_m) = stay.resolved_check_out();

    let start_offset = time::day_fraction_percent(time::minutes_since_midnight(in_h, in_m));
    let mut end_offset = time::day_fraction_percent(time::minutes_since_midnight(out_h, out_m));

    let start_day = stay.start.day();
    let mut end_day = stay.end.day();

    // A checkout at 00:00 belongs to the previous day: report it as
    // 100% of that day. Calendar arithmetic, so midnight of the next
    // month's first day lands on this month's last day. Degenerate
    // instants stay where they are.
    if out_h == 0
        && out_m == 0
        && stay.end > stay.start
        && let Some(prev) = stay.end.date().pred_opt()
    {
        end_day = prev.day();
        end_offset = 100.0;
    }

    // -----------------------------
    // Position and width
    // -----------------------------
    let dw = frame.day_width_percent();
    let day_span = i64::from(end_day) - i64::from(start_day);

    let left = f64::from(start_day - 1) * dw + start_offset * dw / 100.0;

    let width = if day_span <= 0 {
        // Same calendar day
        (end_offset - start_offset) * dw / 100.0
    } else {
        let first_day_partial = (100.0 - start_offset) * dw / 100.0;
        let full_days_between = (day_span - 1) as f64 * dw;
        let last_day_partial = end_offset * dw / 100.0;
        first_day_partial + full_days_between + last_day_partial
    };

    Ok(BarLayout {
        left,
        width: width.max(MIN_BAR_WIDTH_PERCENT),
        start_day,
        end_day,
        start_offset_percent: start_offset,
        end_offset_percent: end_offset,
    })
}
