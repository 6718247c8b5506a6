//! Forecast horizon parsing.

use crate::error::{ForecastError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of future months to project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Horizon(usize);

impl Horizon {
    /// Horizon used when the caller does not ask for one.
    pub const DEFAULT: Horizon = Horizon(6);

    /// Longest accepted horizon, one hundred years.
    pub const MAX_MONTHS: usize = 1200;

    pub fn new(months: usize) -> Result<Self> {
        if months > Self::MAX_MONTHS {
            return Err(ForecastError::InvalidHorizon(format!(
                "{months} months exceeds the maximum of {}",
                Self::MAX_MONTHS
            )));
        }
        Ok(Self(months))
    }

    /// Zero and negative counts become an empty horizon.
    pub fn from_signed(months: i64) -> Result<Self> {
        if months <= 0 {
            return Ok(Self(0));
        }
        usize::try_from(months)
            .map_err(|_| ForecastError::InvalidHorizon(months.to_string()))
            .and_then(Self::new)
    }

    /// Parse caller input leniently.
    ///
    /// Leading whitespace and a sign are accepted, the leading digits are
    /// used and anything after them is ignored, so `"6.7"` is 6 and
    /// `"12 months"` is 12. Input without leading digits is an error.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(ForecastError::InvalidHorizon(input.to_string()));
        }
        let digits = &rest[..digits_len];
        if negative {
            return Ok(Self(0));
        }
        let months: usize = digits
            .parse()
            .map_err(|_| ForecastError::InvalidHorizon(input.to_string()))?;
        Self::new(months).map_err(|_| ForecastError::InvalidHorizon(input.to_string()))
    }

    pub fn months(self) -> usize {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Horizon {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}
