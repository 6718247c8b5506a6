//! Seasonal index projection with a trend adjustment.
//!
//! Each future month is forecast as
//!
//! ```text
//! overall_mean * index[month] * trend.factor(months_since_latest)
//! ```
//!
//! with a symmetric confidence band of `±band` around the point value.
//! Values are rounded half away from zero, which for the non-negative
//! forecasts produced here is the same as rounding half up.

use crate::core::{ForecastPoint, SalesPoint, YearMonth};
use crate::error::{ForecastError, Result};
use crate::models::{Forecaster, Horizon, LinearGrowth, TrendModel};
use crate::seasonality::{seasonal_decomposition, SeasonalDecomposition, SeasonalIndices};

/// Width of the confidence band when none is configured.
pub const DEFAULT_CONFIDENCE_BAND: f64 = 0.15;

/// Stateless projector of seasonal demand.
#[derive(Debug, Clone)]
pub struct SeasonalProjector<T: TrendModel = LinearGrowth> {
    trend: T,
    band: f64,
}

impl SeasonalProjector<LinearGrowth> {
    /// Projector with 5% annual growth and a ±15% band.
    pub fn new() -> Self {
        Self::with_trend(LinearGrowth::default())
    }
}

impl Default for SeasonalProjector<LinearGrowth> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TrendModel> SeasonalProjector<T> {
    pub fn with_trend(trend: T) -> Self {
        Self {
            trend,
            band: DEFAULT_CONFIDENCE_BAND,
        }
    }

    /// Set the relative band width, in `[0, 1)`.
    pub fn with_band(mut self, band: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&band) {
            return Err(ForecastError::InvalidParameter(format!(
                "confidence band must be in [0, 1), got {band}"
            )));
        }
        self.band = band;
        Ok(self)
    }

    pub fn trend(&self) -> &T {
        &self.trend
    }

    pub fn band(&self) -> f64 {
        self.band
    }

    /// Project `horizon` months past `latest`.
    pub fn project(
        &self,
        indices: &SeasonalIndices,
        overall_mean: f64,
        latest: YearMonth,
        horizon: Horizon,
    ) -> Result<Vec<ForecastPoint>> {
        latest.month_index()?;
        let mut points = Vec::with_capacity(horizon.months());
        let mut target = latest;

        for _ in 0..horizon.months() {
            target = target.next();
            let seasonal_index = indices.values()[target.month_index()?];
            let trend_factor = self.trend.factor(target.months_since(latest));
            let value = (overall_mean * seasonal_index * trend_factor).max(0.0);

            points.push(ForecastPoint {
                year: target.year,
                month: target.month,
                seasonal_index,
                forecast_units: round_units(value),
                upper_bound: round_units(value * (1.0 + self.band)),
                lower_bound: round_units(value * (1.0 - self.band)),
            });
        }

        Ok(points)
    }

    /// Project from a decomposition's own statistics.
    pub fn project_decomposition(
        &self,
        decomposition: &SeasonalDecomposition,
        horizon: Horizon,
    ) -> Result<Vec<ForecastPoint>> {
        self.project(
            &decomposition.indices,
            decomposition.overall_mean,
            decomposition.latest,
            horizon,
        )
    }

    /// Decompose `history` and project it forward.
    pub fn forecast(
        &self,
        history: &[SalesPoint],
        horizon: Horizon,
    ) -> Result<(SeasonalDecomposition, Vec<ForecastPoint>)> {
        let decomposition = seasonal_decomposition(history)?;
        let forecast = self.project_decomposition(&decomposition, horizon)?;
        Ok((decomposition, forecast))
    }
}

fn round_units(value: f64) -> u64 {
    value.round() as u64
}

/// [`SeasonalProjector`] behind the fit/predict interface.
#[derive(Debug, Clone)]
pub struct SeasonalTrendModel<T: TrendModel = LinearGrowth> {
    projector: SeasonalProjector<T>,
    decomposition: Option<SeasonalDecomposition>,
}

impl SeasonalTrendModel<LinearGrowth> {
    pub fn new() -> Self {
        Self::with_projector(SeasonalProjector::new())
    }
}

impl Default for SeasonalTrendModel<LinearGrowth> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TrendModel> SeasonalTrendModel<T> {
    pub fn with_projector(projector: SeasonalProjector<T>) -> Self {
        Self {
            projector,
            decomposition: None,
        }
    }

    pub fn decomposition(&self) -> Option<&SeasonalDecomposition> {
        self.decomposition.as_ref()
    }

    pub fn seasonal_indices(&self) -> Option<&SeasonalIndices> {
        self.decomposition.as_ref().map(|d| &d.indices)
    }
}

impl<T: TrendModel> Forecaster for SeasonalTrendModel<T> {
    fn fit(&mut self, history: &[SalesPoint]) -> Result<()> {
        self.decomposition = Some(seasonal_decomposition(history)?);
        Ok(())
    }

    fn predict(&self, horizon: Horizon) -> Result<Vec<ForecastPoint>> {
        let decomposition = self
            .decomposition
            .as_ref()
            .ok_or(ForecastError::FitRequired)?;
        self.projector.project_decomposition(decomposition, horizon)
    }

    fn name(&self) -> &str {
        "SeasonalTrend"
    }

    fn is_fitted(&self) -> bool {
        self.decomposition.is_some()
    }
}
