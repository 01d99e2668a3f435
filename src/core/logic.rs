use std::collections::BTreeMap;

use crate::core::calculator::layout::{self, BarLayout};
use crate::core::calculator::duration;
use crate::errors::AppResult;
use crate::models::booking::{Booking, StayInterval};
use crate::models::month::MonthFrame;
use crate::models::sheet::{MonthSheet, RoomRow, SheetBar};

pub struct Core;

impl Core {
    /// Assembles the month view: validates each booking, clips stays to
    /// the frame, positions a bar per room line, groups by room and
    /// sorts rooms alphabetically, bars left to right.
    ///
    /// Duration labels resolve from the unclipped stay, so a bar cut at
    /// the month edge still reports the full stay length.
    pub fn build_month_sheet(bookings: &[Booking], frame: &MonthFrame) -> AppResult<MonthSheet> {
        let mut rows: BTreeMap<String, Vec<SheetBar>> = BTreeMap::new();

        for booking in bookings {
            booking.validate()?;

            let Some((clipped, was_clipped)) = clip_to_frame(&booking.stay, frame) else {
                continue;
            };
            let bar_layout = layout::compute_layout(&clipped, frame)?;

            if booking.rooms.is_empty() {
                let hours = duration::resolve_duration_hours(
                    None,
                    booking.duration_hours,
                    booking.stay.start,
                    booking.stay.end,
                );
                rows.entry("(unassigned)".to_string()).or_default().push(
                    make_bar(booking, &booking.sequence, bar_layout, hours, was_clipped),
                );
                continue;
            }

            for room in &booking.rooms {
                let hours = duration::resolve_duration_hours(
                    room.duration_hours,
                    booking.duration_hours,
                    booking.stay.start,
                    booking.stay.end,
                );
                let sequence = if room.sequence.is_empty() {
                    &booking.sequence
                } else {
                    &room.sequence
                };
                rows.entry(room.label()).or_default().push(make_bar(
                    booking,
                    sequence,
                    bar_layout,
                    hours,
                    was_clipped,
                ));
            }
        }

        let rows = rows
            .into_iter()
            .map(|(room, mut bars)| {
                bars.sort_by(|a, b| a.layout.left.total_cmp(&b.layout.left));
                RoomRow { room, bars }
            })
            .collect();

        Ok(MonthSheet {
            frame: *frame,
            rows,
        })
    }
}

fn make_bar(
    booking: &Booking,
    sequence: &str,
    bar_layout: BarLayout,
    hours: f64,
    clipped: bool,
) -> SheetBar {
    SheetBar {
        sequence: sequence.to_string(),
        partner_name: booking.partner_name.clone(),
        status: booking.status,
        layout: bar_layout,
        duration_label: duration::format_duration_hours(hours),
        half_day_checkin: booking.stay.is_half_day_checkin(),
        half_day_checkout: booking.stay.is_half_day_checkout(),
        clipped,
    }
}

/// Restricts a stay to the frame. Returns None when the stay has no
/// presence in the month. A clipped edge loses its hour/minute
/// overrides: the real check-in or check-out happened in another
/// month, so the bar runs flush to the frame edge.
fn clip_to_frame(stay: &StayInterval, frame: &MonthFrame) -> Option<(StayInterval, bool)> {
    if !frame.overlaps(stay.start, stay.end) {
        return None;
    }

    let lo = frame.first_instant();
    let hi = frame.upper_bound();

    let mut clipped = *stay;
    let mut was_clipped = false;

    if clipped.start < lo {
        clipped.start = lo;
        clipped.check_in_hour = None;
        clipped.check_in_minute = None;
        was_clipped = true;
    }
    if clipped.end > hi {
        clipped.end = hi;
        clipped.check_out_hour = None;
        clipped.check_out_minute = None;
        was_clipped = true;
    }

    Some((clipped, was_clipped))
}
