pub mod booking;
pub mod month;
pub mod sheet;
pub mod status;
