#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rg() -> Command {
    cargo_bin_cmd!("roomgantt")
}

/// Create a unique temp file path and remove any leftover from a
/// previous run
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_roomgantt.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a saved API response fixture and return its path
pub fn write_fixture(name: &str, json: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, json).expect("write fixture");
    path
}

/// A realistic January 2024 response: five bookings covering explicit
/// hour overrides, a midnight checkout, a day-use stay, a cross-month
/// stay on another hotel and a roomless booking with sentinel overrides
pub fn sample_response() -> &'static str {
    r#"{
  "success": true,
  "count": 5,
  "hotel_id": 1,
  "hotel_name": "Hotel Aurora",
  "data": [
    {
      "id": 1,
      "sequence_id": "BOOK-001",
      "partner_name": "Alice Johnson",
      "check_in": "2024-01-15 14:00:00",
      "check_out": "2024-01-20 11:00:00",
      "status_bar": "confirmed",
      "check_in_hour": 14,
      "check_in_minute": 0,
      "check_out_hour": 11,
      "check_out_minute": 0,
      "is_half_day_checkin": true,
      "is_half_day_checkout": true,
      "hotel_id": 1,
      "hotel_name": "Hotel Aurora",
      "booking_days": 5,
      "rooms": [
        {
          "id": 11,
          "booking_sequence_id": "BOOK-001-1",
          "room_id": 101,
          "room_name": "101",
          "room_code": "ROOM-101",
          "booking_days": 5,
          "price": 120.0
        }
      ]
    },
    {
      "id": 2,
      "sequence_id": "BOOK-002",
      "partner_name": "Bob Smith",
      "check_in": "2024-01-05T00:00:00",
      "check_out": "2024-01-07 00:00:00",
      "status_bar": "checkin",
      "check_in_hour": 0,
      "check_in_minute": 0,
      "check_out_hour": 0,
      "check_out_minute": 0,
      "hotel_id": 1,
      "booking_days": 2,
      "rooms": [
        {
          "id": 12,
          "booking_sequence_id": "BOOK-002-1",
          "room_id": 102,
          "room_name": "102",
          "room_code": "ROOM-102",
          "booking_days": 2
        }
      ]
    },
    {
      "id": 3,
      "sequence_id": "BOOK-003",
      "partner_name": "Carol Diaz",
      "check_in": "2024-01-15 14:00:00",
      "check_out": "2024-01-15 16:00:00",
      "status_bar": "draft",
      "check_in_hour": null,
      "check_in_minute": null,
      "check_out_hour": null,
      "check_out_minute": null,
      "hotel_id": 1,
      "booking_days": 0,
      "rooms": [
        {
          "id": 13,
          "booking_sequence_id": "BOOK-003-1",
          "room_id": 101,
          "room_name": "101",
          "room_code": "ROOM-101",
          "booking_days": 0
        }
      ]
    },
    {
      "id": 4,
      "sequence_id": "BOOK-004",
      "partner_name": "Dmitri Ivanov",
      "check_in": "2023-12-28 19:00:00",
      "check_out": "2024-01-03 10:00:00",
      "status_bar": "checkout_pending",
      "check_in_hour": 19,
      "check_in_minute": 0,
      "check_out_hour": 10,
      "check_out_minute": 0,
      "hotel_id": 2,
      "booking_days": 6,
      "rooms": [
        {
          "id": 14,
          "booking_sequence_id": "BOOK-004-1",
          "room_id": 201,
          "room_name": "201",
          "room_code": "ROOM-201",
          "booking_days": 6
        }
      ]
    },
    {
      "id": 5,
      "sequence_id": "BOOK-005",
      "partner_name": "Erin Walsh",
      "check_in": "2024-01-10 12:30:00",
      "check_out": "2024-01-12 09:15:00",
      "status_bar": "pending",
      "check_in_hour": -1,
      "check_in_minute": -1,
      "check_out_hour": null,
      "check_out_minute": null,
      "hotel_id": 1,
      "booking_days": null,
      "rooms": []
    }
  ]
}"#
}

/// Three broken bookings (unknown status, reversed interval, hour out
/// of range) plus one valid entry
pub fn broken_response() -> &'static str {
    r#"{
  "success": true,
  "count": 4,
  "hotel_id": 1,
  "hotel_name": "Hotel Aurora",
  "data": [
    {
      "id": 8,
      "sequence_id": "GOOD-001",
      "partner_name": "Frank Mills",
      "check_in": "2024-01-08 14:00:00",
      "check_out": "2024-01-09 11:00:00",
      "status_bar": "confirmed",
      "hotel_id": 1,
      "booking_days": 1,
      "rooms": []
    },
    {
      "id": 9,
      "sequence_id": "BAD-001",
      "partner_name": "Grace Hall",
      "check_in": "2024-01-10 14:00:00",
      "check_out": "2024-01-11 11:00:00",
      "status_bar": "teleported",
      "hotel_id": 1,
      "rooms": []
    },
    {
      "id": 10,
      "sequence_id": "BAD-002",
      "partner_name": "Hugo Reyes",
      "check_in": "2024-01-10 12:00:00",
      "check_out": "2024-01-09 12:00:00",
      "status_bar": "confirmed",
      "hotel_id": 1,
      "rooms": []
    },
    {
      "id": 11,
      "sequence_id": "BAD-003",
      "partner_name": "Ivy Chen",
      "check_in": "2024-01-12 14:00:00",
      "check_out": "2024-01-13 11:00:00",
      "status_bar": "confirmed",
      "check_in_hour": 99,
      "hotel_id": 1,
      "rooms": []
    }
  ]
}"#
}

/// The failure envelope the API sends when something goes wrong
pub fn error_response() -> &'static str {
    r#"{
  "success": false,
  "error": "Invalid API key"
}"#
}
