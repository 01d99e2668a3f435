pub mod messages;

use crate::models::status::BookingStatus;
use ansi_term::Colour;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Terminal color for each booking state.
pub fn status_colour(status: BookingStatus) -> Colour {
    match status {
        BookingStatus::Confirmed => Colour::Blue,
        BookingStatus::Checkin => Colour::Green,
        BookingStatus::Checkout | BookingStatus::CheckoutPending => Colour::Cyan,
        BookingStatus::CleaningNeeded | BookingStatus::Allot => Colour::Yellow,
        BookingStatus::RoomReady => Colour::Purple,
        BookingStatus::Cancelled | BookingStatus::NoShow => Colour::Red,
        BookingStatus::Initial | BookingStatus::Draft | BookingStatus::Pending => Colour::White,
    }
}
