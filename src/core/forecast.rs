//! Forecast result structures.

use crate::core::sales::{SalesPoint, YearMonth};
use crate::seasonality::SeasonalIndices;
use serde::{Deserialize, Serialize};

/// Projected demand for one future month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub year: i32,
    pub month: u32,
    /// Seasonal index applied to this month.
    pub seasonal_index: f64,
    /// Rounded point forecast in units.
    pub forecast_units: u64,
    pub upper_bound: u64,
    pub lower_bound: u64,
}

impl ForecastPoint {
    pub fn period(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Width of the band above the point forecast.
    pub fn headroom(&self) -> u64 {
        self.upper_bound.saturating_sub(self.forecast_units)
    }
}

/// Identifying details of the product being forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
}

impl ProductSummary {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: sku.into(),
            category: category.into(),
        }
    }
}

/// Everything the presentation layer needs to chart a product forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForecast {
    pub product: ProductSummary,
    pub seasonal_indices: SeasonalIndices,
    pub historical_data: Vec<SalesPoint>,
    pub forecast: Vec<ForecastPoint>,
}

impl ProductForecast {
    /// Sum of point forecasts over the horizon.
    pub fn projected_units(&self) -> u64 {
        self.forecast.iter().map(|p| p.forecast_units).sum()
    }

    pub fn latest_period(&self) -> Option<YearMonth> {
        self.historical_data.last().map(SalesPoint::period)
    }
}
