//! Inventory planning insights derived from a forecast.

use crate::core::{ForecastPoint, MONTH_NAMES};
use crate::seasonality::SeasonalIndices;
use serde::Serialize;

/// Seasonal index above which the next month is treated as high demand.
pub const DEFAULT_HIGH_DEMAND_THRESHOLD: f64 = 1.1;

/// Months listed in each of the peak and low rankings.
pub const DEFAULT_INSIGHT_MONTHS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemandLevel {
    High,
    Normal,
}

/// A calendar month and how far its demand sits from average.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthDeviation {
    pub month: u32,
    pub name: String,
    pub seasonal_index: f64,
    /// Positive above average, negative below.
    pub percent_from_average: f64,
}

impl MonthDeviation {
    fn new(month_idx: usize, seasonal_index: f64) -> Self {
        Self {
            month: month_idx as u32 + 1,
            name: MONTH_NAMES[month_idx].to_string(),
            seasonal_index,
            percent_from_average: (seasonal_index - 1.0) * 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightOptions {
    pub months: usize,
    pub high_demand_threshold: f64,
}

impl Default for InsightOptions {
    fn default() -> Self {
        Self {
            months: DEFAULT_INSIGHT_MONTHS,
            high_demand_threshold: DEFAULT_HIGH_DEMAND_THRESHOLD,
        }
    }
}

/// Stocking guidance for the forecast horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastInsights {
    /// Highest seasonal indices first.
    pub peak_months: Vec<MonthDeviation>,
    /// Lowest seasonal indices first.
    pub low_months: Vec<MonthDeviation>,
    pub next_month: Option<ForecastPoint>,
    /// Units to hold above the next month's point forecast.
    pub safety_stock: Option<u64>,
    /// Stock level covering the next month's upper bound.
    pub recommended_stock: Option<u64>,
    pub demand_level: Option<DemandLevel>,
    /// Sum of point forecasts across the horizon.
    pub projected_demand: u64,
}

pub fn forecast_insights(
    indices: &SeasonalIndices,
    forecast: &[ForecastPoint],
    options: &InsightOptions,
) -> ForecastInsights {
    let mut ranked: Vec<(usize, f64)> = indices.iter().enumerate().collect();

    // Stable sorts keep calendar order among equal indices.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let peak_months = ranked
        .iter()
        .take(options.months)
        .map(|&(idx, v)| MonthDeviation::new(idx, v))
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    let low_months = ranked
        .iter()
        .take(options.months)
        .map(|&(idx, v)| MonthDeviation::new(idx, v))
        .collect();

    let next_month = forecast.first().copied();
    let demand_level = next_month.map(|p| {
        if p.seasonal_index > options.high_demand_threshold {
            DemandLevel::High
        } else {
            DemandLevel::Normal
        }
    });

    ForecastInsights {
        peak_months,
        low_months,
        next_month,
        safety_stock: next_month.map(|p| p.headroom()),
        recommended_stock: next_month.map(|p| p.upper_bound),
        demand_level,
        projected_demand: forecast.iter().map(|p| p.forecast_units).sum(),
    }
}
