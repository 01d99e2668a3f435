use crate::core::calculator::layout::BarLayout;
use crate::models::month::MonthFrame;
use crate::models::status::BookingStatus;
use serde::Serialize;

/// One positioned bar on the sheet, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SheetBar {
    pub sequence: String,
    pub partner_name: String,
    pub status: BookingStatus,
    pub layout: BarLayout,
    pub duration_label: String,
    pub half_day_checkin: bool,
    pub half_day_checkout: bool,
    pub clipped: bool, // stay continues outside the displayed month
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomRow {
    pub room: String,
    pub bars: Vec<SheetBar>,
}

/// The assembled month view: frame plus per-room rows of bars.
#[derive(Debug, Clone, Serialize)]
pub struct MonthSheet {
    pub frame: MonthFrame,
    pub rows: Vec<RoomRow>,
}

impl MonthSheet {
    pub fn room_count(&self) -> usize {
        self.rows.len()
    }

    pub fn bar_count(&self) -> usize {
        self.rows.iter().map(|r| r.bars.len()).sum()
    }
}
