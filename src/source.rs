//! Booking data retrieval boundary.
//!
//! The upstream hotel API answers with an envelope
//! `{success, count, hotel_id, hotel_name, data: [...]}`. This module
//! owns the envelope DTOs, their conversion into domain [`Booking`]s,
//! the [`BookingSource`] seam, and the shipped [`FileSource`] that
//! reads a saved response from disk. An HTTP-backed source would take
//! the [`Config`](crate::config::Config) (base URL, X-API-Key value,
//! deadline) at construction; transport is out of scope here.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::booking::{Booking, RoomStay, StayInterval};
use crate::models::month::MonthFrame;
use crate::models::status::BookingStatus;
use crate::utils::time;

/// One fetch: target month plus optional narrowing filters.
#[derive(Debug, Clone)]
pub struct BookingQuery {
    pub frame: MonthFrame,
    pub hotel_id: Option<i64>,
    pub room: Option<String>,
    pub status: Option<BookingStatus>,
}

impl BookingQuery {
    pub fn new(frame: MonthFrame) -> Self {
        Self {
            frame,
            hotel_id: None,
            room: None,
            status: None,
        }
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        if let Some(h) = self.hotel_id
            && booking.hotel_id != Some(h)
        {
            return false;
        }
        if let Some(s) = self.status
            && booking.status != s
        {
            return false;
        }
        if let Some(r) = &self.room
            && !booking.matches_room(r)
        {
            return false;
        }
        self.frame.overlaps(booking.stay.start, booking.stay.end)
    }
}

pub trait BookingSource {
    fn fetch_bookings(&self, query: &BookingQuery) -> AppResult<Vec<Booking>>;
}

/// Reads a saved API response from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parses the whole response and converts every entry, one result
    /// per booking so a single bad record does not hide the rest.
    pub fn load_bookings(&self) -> AppResult<Vec<AppResult<Booking>>> {
        let envelope = self.read_envelope()?;
        Ok(envelope
            .data
            .into_iter()
            .map(|api| {
                api.into_booking().and_then(|b| {
                    b.validate()?;
                    Ok(b)
                })
            })
            .collect())
    }

    fn read_envelope(&self) -> AppResult<ApiEnvelope> {
        let raw = fs::read_to_string(&self.path)?;
        let envelope: ApiEnvelope = serde_json::from_str(&raw)?;

        if !envelope.success {
            return Err(AppError::Source(
                envelope
                    .error
                    .unwrap_or_else(|| "server reported failure without a message".to_string()),
            ));
        }

        Ok(envelope)
    }
}

impl BookingSource for FileSource {
    fn fetch_bookings(&self, query: &BookingQuery) -> AppResult<Vec<Booking>> {
        let bookings: Vec<Booking> = self.load_bookings()?.into_iter().collect::<AppResult<_>>()?;
        Ok(bookings.into_iter().filter(|b| query.matches(b)).collect())
    }
}

// ---------------------------
// Wire DTOs
// ---------------------------

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Vec<ApiBooking>,
}

#[derive(Debug, Deserialize)]
struct ApiBooking {
    id: i64,
    #[serde(default)]
    sequence_id: Option<String>,
    #[serde(default)]
    partner_name: Option<String>,
    check_in: String,
    check_out: String,
    status_bar: String,
    #[serde(default)]
    check_in_hour: Option<i64>,
    #[serde(default)]
    check_in_minute: Option<i64>,
    #[serde(default)]
    check_out_hour: Option<i64>,
    #[serde(default)]
    check_out_minute: Option<i64>,
    #[serde(default)]
    hotel_id: Option<i64>,
    #[serde(default)]
    booking_days: Option<i64>,
    #[serde(default)]
    rooms: Vec<ApiRoomLine>,
}

#[derive(Debug, Deserialize)]
struct ApiRoomLine {
    #[serde(default)]
    booking_sequence_id: Option<String>,
    #[serde(default)]
    room_id: Option<i64>,
    #[serde(default)]
    room_name: Option<String>,
    #[serde(default)]
    room_code: Option<String>,
    #[serde(default)]
    booking_days: Option<i64>,
}

impl ApiBooking {
    fn into_booking(self) -> AppResult<Booking> {
        let sequence = self
            .sequence_id
            .unwrap_or_else(|| format!("booking-{}", self.id));

        let convert = |e: AppError| AppError::InvalidBooking(sequence.clone(), e.to_string());

        let start = time::parse_timestamp(&self.check_in).map_err(&convert)?;
        let end = time::parse_timestamp(&self.check_out).map_err(&convert)?;

        let status = BookingStatus::from_api_str(&self.status_bar)
            .ok_or_else(|| convert(AppError::InvalidStatus(self.status_bar.clone())))?;

        let stay = StayInterval::with_overrides(
            start,
            end,
            clock_override(self.check_in_hour),
            clock_override(self.check_in_minute),
            clock_override(self.check_out_hour),
            clock_override(self.check_out_minute),
        );

        let rooms = self
            .rooms
            .into_iter()
            .map(|line| RoomStay {
                room_id: line.room_id.unwrap_or_default(),
                room_name: line.room_name.unwrap_or_default(),
                room_code: line.room_code.unwrap_or_default(),
                sequence: line.booking_sequence_id.unwrap_or_default(),
                duration_hours: days_to_hours(line.booking_days),
            })
            .collect();

        Ok(Booking {
            id: self.id,
            sequence,
            partner_name: self.partner_name.unwrap_or_default(),
            hotel_id: self.hotel_id,
            status,
            stay,
            duration_hours: days_to_hours(self.booking_days),
            rooms,
        })
    }
}

/// Nullable wire value → optional clock component. Negative sentinels
/// count as absent; out-of-range positives are kept so validation can
/// flag them instead of silently dropping corrupt data.
fn clock_override(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

/// `booking_days` is a whole-day count. Zero marks a day-use booking,
/// whose real length must come from the timestamps, so only positive
/// counts become a precomputed duration.
fn days_to_hours(days: Option<i64>) -> Option<f64> {
    days.filter(|d| *d > 0).map(|d| d as f64 * 24.0)
}
