use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn first_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(format!("{}-{:02}", year, month)))
}

/// First day of the month after (year, month), rolling the year at December.
pub fn first_of_next_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    }
}

pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    let first = first_of_month(year, month)?;
    let next = first_of_next_month(year, month)?;
    Ok((next - first).num_days() as u32)
}

/// Parses a "YYYY-MM" month selector into (year, month).
pub fn parse_month(p: &str) -> AppResult<(i32, u32)> {
    if let Ok(d) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((d.year(), d.month()));
    }

    Err(AppError::InvalidMonth(p.to_string()))
}

pub fn month_label(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}
