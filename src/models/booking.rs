use super::status::BookingStatus;
use crate::errors::{AppError, AppResult};
use crate::utils::time;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// One bookable time span, as the timeline consumes it.
///
/// The explicit hour/minute fields are overrides: when present they
/// beat the time-of-day embedded in `start`/`end`. Hour and minute
/// resolve independently, so an explicit hour may combine with an
/// implicit minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StayInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub check_in_hour: Option<u32>,
    pub check_in_minute: Option<u32>,
    pub check_out_hour: Option<u32>,
    pub check_out_minute: Option<u32>,
}

impl StayInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            check_in_hour: None,
            check_in_minute: None,
            check_out_hour: None,
            check_out_minute: None,
        }
    }

    pub fn with_overrides(
        start: NaiveDateTime,
        end: NaiveDateTime,
        check_in_hour: Option<u32>,
        check_in_minute: Option<u32>,
        check_out_hour: Option<u32>,
        check_out_minute: Option<u32>,
    ) -> Self {
        Self {
            start,
            end,
            check_in_hour,
            check_in_minute,
            check_out_hour,
            check_out_minute,
        }
    }

    /// Effective check-in clock as (hour, minute).
    pub fn resolved_check_in(&self) -> (u32, u32) {
        (
            self.check_in_hour.unwrap_or_else(|| self.start.hour()),
            self.check_in_minute.unwrap_or_else(|| self.start.minute()),
        )
    }

    /// Effective check-out clock as (hour, minute).
    pub fn resolved_check_out(&self) -> (u32, u32) {
        (
            self.check_out_hour.unwrap_or_else(|| self.end.hour()),
            self.check_out_minute.unwrap_or_else(|| self.end.minute()),
        )
    }

    /// Rejects reversed intervals and out-of-range overrides before any
    /// layout math runs. Out-of-range values are upstream corruption
    /// and must not be wrapped or clamped.
    pub fn validate(&self) -> AppResult<()> {
        if self.end < self.start {
            return Err(AppError::InvalidInterval(format!(
                "end {} before start {}",
                self.end, self.start
            )));
        }
        check_clock_range("check_in_hour", self.check_in_hour, 23)?;
        check_clock_range("check_in_minute", self.check_in_minute, 59)?;
        check_clock_range("check_out_hour", self.check_out_hour, 23)?;
        check_clock_range("check_out_minute", self.check_out_minute, 59)?;
        Ok(())
    }

    /// Half-day check-in: arrival from noon on.
    pub fn is_half_day_checkin(&self) -> bool {
        self.resolved_check_in().0 >= 12
    }

    /// Half-day check-out: departure before noon.
    pub fn is_half_day_checkout(&self) -> bool {
        self.resolved_check_out().0 < 12
    }

    pub fn elapsed_hours(&self) -> f64 {
        time::hours_between(self.start, self.end)
    }
}

fn check_clock_range(field: &str, value: Option<u32>, max: u32) -> AppResult<()> {
    if let Some(v) = value
        && v > max
    {
        return Err(AppError::InvalidInterval(format!(
            "{} {} out of range (0-{})",
            field, v, max
        )));
    }
    Ok(())
}

/// One reservation as returned by the booking API, with its room lines.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i64,
    pub sequence: String,
    pub partner_name: String,
    pub hotel_id: Option<i64>,
    pub status: BookingStatus,
    pub stay: StayInterval,
    /// Booking-level precomputed duration, when the API supplied one.
    pub duration_hours: Option<f64>,
    pub rooms: Vec<RoomStay>,
}

impl Booking {
    pub fn validate(&self) -> AppResult<()> {
        self.stay
            .validate()
            .map_err(|e| AppError::InvalidBooking(self.sequence.clone(), e.to_string()))
    }

    /// Room filter used by the CLI: matches name or code, case-blind.
    pub fn matches_room(&self, filter: &str) -> bool {
        self.rooms
            .iter()
            .any(|r| r.room_name.eq_ignore_ascii_case(filter) || r.room_code.eq_ignore_ascii_case(filter))
    }
}

/// One room line inside a booking.
#[derive(Debug, Clone, Serialize)]
pub struct RoomStay {
    pub room_id: i64,
    pub room_name: String,
    pub room_code: String,
    pub sequence: String,
    /// Line-level precomputed duration, preferred over the booking's.
    pub duration_hours: Option<f64>,
}

impl RoomStay {
    /// Display label: prefer the room name, then the code, then the id.
    pub fn label(&self) -> String {
        if !self.room_name.is_empty() {
            self.room_name.clone()
        } else if !self.room_code.is_empty() {
            self.room_code.clone()
        } else {
            format!("room-{}", self.room_id)
        }
    }
}
