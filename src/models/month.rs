use crate::errors::AppResult;
use crate::utils::date;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// The rendered calendar window: one month, every day the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthFrame {
    pub year: i32,
    pub month: u32,
    pub total_days: u32,
}

impl MonthFrame {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        let total_days = date::days_in_month(year, month)?;
        Ok(Self {
            year,
            month,
            total_days,
        })
    }

    /// Frame of the month containing `d`.
    pub fn for_date(d: NaiveDate) -> AppResult<Self> {
        Self::new(d.year(), d.month())
    }

    pub fn day_width_percent(&self) -> f64 {
        100.0 / self.total_days as f64
    }

    /// Midnight of day 1.
    pub fn first_instant(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Midnight of the first day of the next month (exclusive bound).
    pub fn upper_bound(&self) -> NaiveDateTime {
        let (y, m) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(y, m, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// True when `[start, end]` has any presence inside this month.
    /// A stay ending exactly at midnight of day 1 belongs to the
    /// previous month, unless it is a degenerate instant at that
    /// midnight.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        let lo = self.first_instant();
        let hi = self.upper_bound();

        if start >= hi || end < lo {
            return false;
        }
        if end == lo && start < end {
            return false;
        }
        true
    }

    pub fn label(&self) -> String {
        date::month_label(self.year, self.month)
    }
}
