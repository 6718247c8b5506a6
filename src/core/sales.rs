//! Sales transactions and their monthly aggregates.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of a 1-based calendar month.
pub fn month_name(month: u32) -> Result<&'static str> {
    if (1..=12).contains(&month) {
        Ok(MONTH_NAMES[(month - 1) as usize])
    } else {
        Err(ForecastError::InvalidMonth { month })
    }
}

/// A calendar month of a specific year.
///
/// Orders chronologically: year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Create a year-month, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following calendar month, wrapping December into January.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Signed number of months from `earlier` to `self`.
    pub fn months_since(self, earlier: YearMonth) -> i64 {
        (self.year as i64 - earlier.year as i64) * 12 + (self.month as i64 - earlier.month as i64)
    }

    /// Zero-based month index (January = 0).
    pub fn month_index(self) -> Result<usize> {
        if !(1..=12).contains(&self.month) {
            return Err(ForecastError::InvalidMonth { month: self.month });
        }
        Ok((self.month - 1) as usize)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A single recorded sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub quantity: u32,
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
}

impl SaleRecord {
    /// A sale on a regular (non-holiday) day.
    pub fn new(date: NaiveDate, quantity: u32) -> Self {
        Self {
            date,
            quantity,
            is_holiday: false,
            holiday_name: None,
        }
    }

    /// Mark the sale as falling on the named holiday.
    pub fn on_holiday(mut self, name: impl Into<String>) -> Self {
        self.is_holiday = true;
        self.holiday_name = Some(name.into());
        self
    }
}

/// A sale attributed to a product category, used for cross-category seasonality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySale {
    /// Missing categories are reported as "Unknown".
    pub category: Option<String>,
    pub date: NaiveDate,
    pub quantity: u32,
}

impl CategorySale {
    pub fn new(category: impl Into<String>, date: NaiveDate, quantity: u32) -> Self {
        Self {
            category: Some(category.into()),
            date,
            quantity,
        }
    }

    pub fn uncategorized(date: NaiveDate, quantity: u32) -> Self {
        Self {
            category: None,
            date,
            quantity,
        }
    }
}

/// Units sold in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPoint {
    pub year: i32,
    pub month: u32,
    pub total_units: u64,
    /// Portion of `total_units` sold on holidays.
    pub holiday_units: u64,
    /// Number of transactions behind the totals.
    pub transactions: u64,
}

impl SalesPoint {
    /// Create a monthly point with an unknown transaction count.
    ///
    /// The count stays 0, so [`average_units`](Self::average_units) reports
    /// 0.0 until [`with_transactions`](Self::with_transactions) sets it.
    pub fn new(year: i32, month: u32, total_units: u64, holiday_units: u64) -> Result<Self> {
        let point = Self {
            year,
            month,
            total_units,
            holiday_units,
            transactions: 0,
        };
        point.validate()?;
        Ok(point)
    }

    pub fn with_transactions(mut self, transactions: u64) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Mean units per transaction, 0 when the month has no transactions.
    pub fn average_units(&self) -> f64 {
        if self.transactions == 0 {
            0.0
        } else {
            self.total_units as f64 / self.transactions as f64
        }
    }

    /// Check the month range and the holiday sub-total.
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(ForecastError::InvalidMonth { month: self.month });
        }
        if self.holiday_units > self.total_units {
            return Err(ForecastError::InvalidSalesPoint(format!(
                "{}: holiday units {} exceed total units {}",
                self.period(),
                self.holiday_units,
                self.total_units
            )));
        }
        Ok(())
    }
}
