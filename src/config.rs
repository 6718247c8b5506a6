//! Forecast configuration.
//!
//! Every field has a default, so an empty TOML document is valid:
//!
//! ```toml
//! default_horizon = 6
//! annual_growth_rate = 0.05
//! confidence_band = 0.15
//! high_demand_threshold = 1.1
//! insight_months = 3
//! history_years = 3
//! ```

use crate::error::{ForecastError, Result};
use crate::insights::{InsightOptions, DEFAULT_HIGH_DEMAND_THRESHOLD, DEFAULT_INSIGHT_MONTHS};
use crate::models::{
    Horizon, LinearGrowth, SeasonalProjector, DEFAULT_ANNUAL_GROWTH, DEFAULT_CONFIDENCE_BAND,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Months projected when a request does not name a horizon.
    pub default_horizon: usize,
    pub annual_growth_rate: f64,
    /// Relative width of the confidence band.
    pub confidence_band: f64,
    pub high_demand_threshold: f64,
    pub insight_months: usize,
    /// Restrict history to the last N years; `None` uses everything.
    pub history_years: Option<u32>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_horizon: Horizon::DEFAULT.months(),
            annual_growth_rate: DEFAULT_ANNUAL_GROWTH,
            confidence_band: DEFAULT_CONFIDENCE_BAND,
            high_demand_threshold: DEFAULT_HIGH_DEMAND_THRESHOLD,
            insight_months: DEFAULT_INSIGHT_MONTHS,
            history_years: None,
        }
    }
}

impl ForecastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ForecastError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ForecastError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ForecastError::Config(e.to_string()))
    }

    pub fn with_default_horizon(mut self, months: usize) -> Self {
        self.default_horizon = months;
        self
    }

    pub fn with_annual_growth_rate(mut self, rate: f64) -> Self {
        self.annual_growth_rate = rate;
        self
    }

    pub fn with_confidence_band(mut self, band: f64) -> Self {
        self.confidence_band = band;
        self
    }

    pub fn with_high_demand_threshold(mut self, threshold: f64) -> Self {
        self.high_demand_threshold = threshold;
        self
    }

    pub fn with_insight_months(mut self, months: usize) -> Self {
        self.insight_months = months;
        self
    }

    pub fn with_history_years(mut self, years: Option<u32>) -> Self {
        self.history_years = years;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.default_horizon()?;
        self.projector()?;
        if !self.high_demand_threshold.is_finite() || self.high_demand_threshold <= 0.0 {
            return Err(ForecastError::Config(format!(
                "high_demand_threshold must be positive, got {}",
                self.high_demand_threshold
            )));
        }
        if self.history_years == Some(0) {
            return Err(ForecastError::Config(
                "history_years must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn default_horizon(&self) -> Result<Horizon> {
        Horizon::new(self.default_horizon).map_err(|e| ForecastError::Config(e.to_string()))
    }

    pub fn projector(&self) -> Result<SeasonalProjector<LinearGrowth>> {
        let trend = LinearGrowth::new(self.annual_growth_rate)
            .map_err(|e| ForecastError::Config(e.to_string()))?;
        SeasonalProjector::with_trend(trend)
            .with_band(self.confidence_band)
            .map_err(|e| ForecastError::Config(e.to_string()))
    }

    pub fn insight_options(&self) -> InsightOptions {
        InsightOptions {
            months: self.insight_months,
            high_demand_threshold: self.high_demand_threshold,
        }
    }
}
