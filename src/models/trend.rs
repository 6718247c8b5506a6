//! Trend adjustments applied on top of seasonal demand.

use crate::error::{ForecastError, Result};
use std::fmt::Debug;

/// Assumed demand growth per year when no other trend is configured.
pub const DEFAULT_ANNUAL_GROWTH: f64 = 0.05;

/// Multiplicative adjustment for demand `months_ahead` months past the last observation.
pub trait TrendModel: Debug + Send + Sync {
    fn factor(&self, months_ahead: i64) -> f64;

    fn name(&self) -> &str;
}

/// Fixed linear growth: `1 + annual_rate * months_ahead / 12`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGrowth {
    annual_rate: f64,
}

impl LinearGrowth {
    /// Create a growth trend; rates at or below -100% per year are rejected.
    pub fn new(annual_rate: f64) -> Result<Self> {
        if !annual_rate.is_finite() || annual_rate <= -1.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "annual growth rate must be finite and greater than -1, got {annual_rate}"
            )));
        }
        Ok(Self { annual_rate })
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }
}

impl Default for LinearGrowth {
    fn default() -> Self {
        Self {
            annual_rate: DEFAULT_ANNUAL_GROWTH,
        }
    }
}

impl TrendModel for LinearGrowth {
    fn factor(&self, months_ahead: i64) -> f64 {
        1.0 + self.annual_rate * months_ahead as f64 / 12.0
    }

    fn name(&self) -> &str {
        "LinearGrowth"
    }
}

/// Flat demand: seasonality only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTrend;

impl TrendModel for NoTrend {
    fn factor(&self, _months_ahead: i64) -> f64 {
        1.0
    }

    fn name(&self) -> &str {
        "NoTrend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_growth_is_five_percent_per_year() {
        let trend = LinearGrowth::default();
        assert_relative_eq!(trend.factor(0), 1.0);
        assert_relative_eq!(trend.factor(1), 1.0 + 0.05 / 12.0);
        assert_relative_eq!(trend.factor(12), 1.05);
        assert_relative_eq!(trend.factor(24), 1.10);
    }

    #[test]
    fn custom_rate() {
        let trend = LinearGrowth::new(0.12).unwrap();
        assert_relative_eq!(trend.factor(6), 1.06);
        assert_eq!(trend.annual_rate(), 0.12);
    }

    #[test]
    fn rejects_collapse_rates() {
        assert!(LinearGrowth::new(-1.0).is_err());
        assert!(LinearGrowth::new(f64::NAN).is_err());
        assert!(LinearGrowth::new(-0.2).is_ok());
    }

    #[test]
    fn no_trend_is_flat() {
        assert_eq!(NoTrend.factor(120), 1.0);
        assert_eq!(NoTrend.name(), "NoTrend");
    }
}
