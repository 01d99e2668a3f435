use serde::Serialize;

/// Reservation state as emitted by the booking API.
/// The API uses both "checkin" and "check_in" for the same state;
/// parsing normalizes the underscore spelling away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Initial,
    Draft,
    Pending,
    Confirmed,
    Allot,
    Checkin,
    CheckoutPending,
    Checkout,
    CleaningNeeded,
    RoomReady,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "initial" => Some(Self::Initial),
            "draft" => Some(Self::Draft),
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "allot" => Some(Self::Allot),
            "checkin" | "check_in" => Some(Self::Checkin),
            "checkout_pending" => Some(Self::CheckoutPending),
            "checkout" => Some(Self::Checkout),
            "cleaning_needed" => Some(Self::CleaningNeeded),
            "room_ready" => Some(Self::RoomReady),
            "cancelled" => Some(Self::Cancelled),
            "no_show" => Some(Self::NoShow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Initial => "initial",
            BookingStatus::Draft => "draft",
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Allot => "allot",
            BookingStatus::Checkin => "checkin",
            BookingStatus::CheckoutPending => "checkout_pending",
            BookingStatus::Checkout => "checkout",
            BookingStatus::CleaningNeeded => "cleaning_needed",
            BookingStatus::RoomReady => "room_ready",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no_show",
        }
    }

    /// A terminal booking admits no further state transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Checkout | Self::NoShow)
    }
}
