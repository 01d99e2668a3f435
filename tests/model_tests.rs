use chrono::{NaiveDate, NaiveDateTime};
use roomgantt::errors::AppError;
use roomgantt::models::booking::{Booking, RoomStay, StayInterval};
use roomgantt::models::month::MonthFrame;
use roomgantt::models::status::BookingStatus;
use roomgantt::utils::date;

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

// ---------------------------
// BookingStatus
// ---------------------------

#[test]
fn test_status_parses_every_api_spelling() {
    let cases = [
        ("initial", BookingStatus::Initial),
        ("draft", BookingStatus::Draft),
        ("pending", BookingStatus::Pending),
        ("confirmed", BookingStatus::Confirmed),
        ("allot", BookingStatus::Allot),
        ("checkin", BookingStatus::Checkin),
        ("check_in", BookingStatus::Checkin),
        ("checkout_pending", BookingStatus::CheckoutPending),
        ("checkout", BookingStatus::Checkout),
        ("cleaning_needed", BookingStatus::CleaningNeeded),
        ("room_ready", BookingStatus::RoomReady),
        ("cancelled", BookingStatus::Cancelled),
        ("no_show", BookingStatus::NoShow),
    ];
    for (spelling, expected) in cases {
        assert_eq!(
            BookingStatus::from_api_str(spelling),
            Some(expected),
            "spelling {:?}",
            spelling
        );
    }
}

#[test]
fn test_status_parse_is_case_blind() {
    assert_eq!(
        BookingStatus::from_api_str("Confirmed"),
        Some(BookingStatus::Confirmed)
    );
    assert_eq!(
        BookingStatus::from_api_str("CHECK_IN"),
        Some(BookingStatus::Checkin)
    );
}

#[test]
fn test_status_rejects_unknown_spelling() {
    assert_eq!(BookingStatus::from_api_str("teleported"), None);
    assert_eq!(BookingStatus::from_api_str(""), None);
}

#[test]
fn test_status_round_trips_through_as_str() {
    let all = [
        BookingStatus::Initial,
        BookingStatus::Draft,
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Allot,
        BookingStatus::Checkin,
        BookingStatus::CheckoutPending,
        BookingStatus::Checkout,
        BookingStatus::CleaningNeeded,
        BookingStatus::RoomReady,
        BookingStatus::Cancelled,
        BookingStatus::NoShow,
    ];
    for status in all {
        assert_eq!(BookingStatus::from_api_str(status.as_str()), Some(status));
    }
}

#[test]
fn test_terminal_statuses() {
    assert!(BookingStatus::Cancelled.is_terminal());
    assert!(BookingStatus::Checkout.is_terminal());
    assert!(BookingStatus::NoShow.is_terminal());

    assert!(!BookingStatus::Checkin.is_terminal());
    assert!(!BookingStatus::CheckoutPending.is_terminal());
    assert!(!BookingStatus::Confirmed.is_terminal());
}

// ---------------------------
// MonthFrame
// ---------------------------

#[test]
fn test_month_lengths_including_leap_years() {
    assert_eq!(MonthFrame::new(2024, 1).unwrap().total_days, 31);
    assert_eq!(MonthFrame::new(2024, 2).unwrap().total_days, 29);
    assert_eq!(MonthFrame::new(2023, 2).unwrap().total_days, 28);
    assert_eq!(MonthFrame::new(2024, 4).unwrap().total_days, 30);
    assert_eq!(MonthFrame::new(2024, 12).unwrap().total_days, 31);
}

#[test]
fn test_invalid_month_number_is_rejected() {
    let err = MonthFrame::new(2024, 13).unwrap_err();
    assert!(matches!(err, AppError::InvalidMonth(_)));
    assert!(matches!(
        MonthFrame::new(2024, 0).unwrap_err(),
        AppError::InvalidMonth(_)
    ));
}

#[test]
fn test_day_width_splits_the_frame_evenly() {
    let frame = MonthFrame::new(2024, 1).unwrap();
    assert!((frame.day_width_percent() - 100.0 / 31.0).abs() < 1e-12);
    assert!((frame.day_width_percent() * frame.total_days as f64 - 100.0).abs() < 1e-9);
}

#[test]
fn test_overlap_edges() {
    let frame = MonthFrame::new(2024, 1).unwrap();

    // Entirely before and entirely after
    assert!(!frame.overlaps(dt(2023, 12, 1, 10, 0), dt(2023, 12, 5, 10, 0)));
    assert!(!frame.overlaps(dt(2024, 2, 2, 10, 0), dt(2024, 2, 4, 10, 0)));

    // Starting exactly at the next month's midnight is outside
    assert!(!frame.overlaps(dt(2024, 2, 1, 0, 0), dt(2024, 2, 3, 0, 0)));

    // Ending exactly at this month's first midnight belongs to December
    assert!(!frame.overlaps(dt(2023, 12, 28, 19, 0), dt(2024, 1, 1, 0, 0)));

    // ...unless the stay is a single instant at that midnight
    assert!(frame.overlaps(dt(2024, 1, 1, 0, 0), dt(2024, 1, 1, 0, 0)));

    // Straddling either edge counts
    assert!(frame.overlaps(dt(2023, 12, 28, 19, 0), dt(2024, 1, 3, 10, 0)));
    assert!(frame.overlaps(dt(2024, 1, 30, 14, 0), dt(2024, 2, 2, 11, 0)));
    assert!(frame.overlaps(dt(2023, 12, 1, 0, 0), dt(2024, 3, 1, 0, 0)));
}

#[test]
fn test_frame_label() {
    assert_eq!(MonthFrame::new(2024, 3).unwrap().label(), "2024-03");
    assert_eq!(MonthFrame::new(987, 12).unwrap().label(), "0987-12");
}

#[test]
fn test_parse_month_selector() {
    assert_eq!(date::parse_month("2024-01").unwrap(), (2024, 1));
    assert_eq!(date::parse_month("1999-12").unwrap(), (1999, 12));
    assert!(matches!(
        date::parse_month("2024-13").unwrap_err(),
        AppError::InvalidMonth(_)
    ));
    assert!(matches!(
        date::parse_month("january").unwrap_err(),
        AppError::InvalidMonth(_)
    ));
}

// ---------------------------
// StayInterval
// ---------------------------

#[test]
fn test_resolved_clock_falls_back_to_timestamps() {
    let stay = StayInterval::new(dt(2024, 1, 15, 14, 30), dt(2024, 1, 20, 11, 45));
    assert_eq!(stay.resolved_check_in(), (14, 30));
    assert_eq!(stay.resolved_check_out(), (11, 45));
}

#[test]
fn test_hour_and_minute_resolve_independently() {
    let stay = StayInterval::with_overrides(
        dt(2024, 1, 15, 9, 30),
        dt(2024, 1, 20, 11, 45),
        Some(14),
        None,
        None,
        Some(0),
    );
    // Explicit hour, implicit minute (and vice versa on the way out)
    assert_eq!(stay.resolved_check_in(), (14, 30));
    assert_eq!(stay.resolved_check_out(), (11, 0));
}

#[test]
fn test_validate_rejects_reversed_interval() {
    let stay = StayInterval::new(dt(2024, 1, 20, 11, 0), dt(2024, 1, 15, 14, 0));
    assert!(matches!(
        stay.validate().unwrap_err(),
        AppError::InvalidInterval(_)
    ));
}

#[test]
fn test_validate_rejects_out_of_range_overrides() {
    let base = StayInterval::new(dt(2024, 1, 15, 14, 0), dt(2024, 1, 20, 11, 0));

    let mut stay = base;
    stay.check_in_hour = Some(24);
    assert!(stay.validate().is_err());

    let mut stay = base;
    stay.check_out_minute = Some(60);
    assert!(stay.validate().is_err());

    let mut stay = base;
    stay.check_in_hour = Some(23);
    stay.check_out_minute = Some(59);
    assert!(stay.validate().is_ok());
}

#[test]
fn test_half_day_flags_use_resolved_clock() {
    // 14:00 in, 11:00 out: both half-day
    let stay = StayInterval::new(dt(2024, 1, 15, 14, 0), dt(2024, 1, 20, 11, 0));
    assert!(stay.is_half_day_checkin());
    assert!(stay.is_half_day_checkout());

    // Noon checkout is a full day; 11:59 arrival is a full day
    let stay = StayInterval::new(dt(2024, 1, 15, 11, 59), dt(2024, 1, 20, 12, 0));
    assert!(!stay.is_half_day_checkin());
    assert!(!stay.is_half_day_checkout());

    // Overrides shift the verdict
    let stay = StayInterval::with_overrides(
        dt(2024, 1, 15, 9, 0),
        dt(2024, 1, 20, 14, 0),
        Some(12),
        None,
        Some(11),
        None,
    );
    assert!(stay.is_half_day_checkin());
    assert!(stay.is_half_day_checkout());
}

// ---------------------------
// Booking and RoomStay
// ---------------------------

fn room(name: &str, code: &str) -> RoomStay {
    RoomStay {
        room_id: 7,
        room_name: name.to_string(),
        room_code: code.to_string(),
        sequence: "BOOK-001/1".to_string(),
        duration_hours: None,
    }
}

#[test]
fn test_room_filter_matches_name_or_code_case_blind() {
    let booking = Booking {
        id: 1,
        sequence: "BOOK-001".to_string(),
        partner_name: "Alice Johnson".to_string(),
        hotel_id: Some(1),
        status: BookingStatus::Confirmed,
        stay: StayInterval::new(dt(2024, 1, 15, 14, 0), dt(2024, 1, 20, 11, 0)),
        duration_hours: None,
        rooms: vec![room("Suite 101", "R101")],
    };

    assert!(booking.matches_room("suite 101"));
    assert!(booking.matches_room("r101"));
    assert!(!booking.matches_room("102"));
}

#[test]
fn test_room_label_fallback_chain() {
    assert_eq!(room("Suite 101", "R101").label(), "Suite 101");
    assert_eq!(room("", "R101").label(), "R101");
    assert_eq!(room("", "").label(), "room-7");
}

#[test]
fn test_booking_validation_names_the_sequence() {
    let booking = Booking {
        id: 2,
        sequence: "BOOK-002".to_string(),
        partner_name: "Bob Smith".to_string(),
        hotel_id: None,
        status: BookingStatus::Draft,
        stay: StayInterval::new(dt(2024, 1, 20, 11, 0), dt(2024, 1, 15, 14, 0)),
        duration_hours: None,
        rooms: Vec::new(),
    };

    match booking.validate().unwrap_err() {
        AppError::InvalidBooking(seq, _) => assert_eq!(seq, "BOOK-002"),
        other => panic!("unexpected error: {:?}", other),
    }
}
