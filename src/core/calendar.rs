//! Fixed-date holiday calendar used to flag sales at ingestion time.

use crate::core::sales::SaleRecord;
use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};

/// Holidays observed by default as `(month, day, name)`.
///
/// Thanksgiving is pinned to November 25 rather than the fourth Thursday.
pub const DEFAULT_HOLIDAYS: [(u32, u32, &str); 5] = [
    (12, 25, "Christmas"),
    (10, 31, "Halloween"),
    (11, 25, "Thanksgiving"),
    (1, 1, "New Year's Day"),
    (7, 4, "Independence Day"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Holiday {
    month: u32,
    day: u32,
    name: String,
}

/// Annual holidays keyed by month and day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// A calendar with no holidays.
    pub fn empty() -> Self {
        Self {
            holidays: Vec::new(),
        }
    }

    /// Add a holiday, replacing any existing entry for the same day.
    pub fn with_holiday(mut self, month: u32, day: u32, name: impl Into<String>) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidMonth { month });
        }
        // 2024 is a leap year, so Feb 29 is accepted.
        if NaiveDate::from_ymd_opt(2024, month, day).is_none() {
            return Err(ForecastError::InvalidParameter(format!(
                "day {day} does not exist in month {month}"
            )));
        }
        self.holidays.retain(|h| !(h.month == month && h.day == day));
        self.holidays.push(Holiday {
            month,
            day,
            name: name.into(),
        });
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Name of the holiday falling on `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays
            .iter()
            .find(|h| h.month == date.month() && h.day == date.day())
            .map(|h| h.name.as_str())
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Build a sale record with its holiday flag filled in.
    pub fn tag(&self, date: NaiveDate, quantity: u32) -> SaleRecord {
        let record = SaleRecord::new(date, quantity);
        match self.holiday_name(date) {
            Some(name) => record.on_holiday(name),
            None => record,
        }
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self {
            holidays: DEFAULT_HOLIDAYS
                .iter()
                .map(|&(month, day, name)| Holiday {
                    month,
                    day,
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}
