//! # petsupply-forecast
//!
//! Seasonal demand forecasting for pet-supply inventory.
//!
//! Raw sales are aggregated into calendar-month totals, month-of-year
//! seasonal indices are derived from them, and demand is projected forward
//! by combining seasonality with a configurable growth trend. A cross-category
//! view compares month-of-year profiles between product categories.
//!
//! ```
//! use petsupply_forecast::prelude::*;
//!
//! let history: Vec<SalesPoint> = (1..=12)
//!     .map(|m| SalesPoint::new(2023, m, if m == 12 { 200 } else { 100 }, 0).unwrap())
//!     .collect();
//!
//! let (decomposition, forecast) = SeasonalProjector::new()
//!     .forecast(&history, Horizon::DEFAULT)
//!     .unwrap();
//!
//! assert!(decomposition.indices.for_month(12).unwrap() > 1.8);
//! assert_eq!(forecast.len(), 6);
//! assert_eq!((forecast[0].year, forecast[0].month), (2024, 1));
//! ```

#![allow(clippy::needless_range_loop)]

pub mod aggregate;
pub mod config;
pub mod core;
pub mod error;
pub mod insights;
pub mod models;
pub mod seasonality;
pub mod service;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::aggregate::{aggregate_monthly, category_seasonality};
    pub use crate::config::ForecastConfig;
    pub use crate::core::{ForecastPoint, HolidayCalendar, ProductForecast, SaleRecord, SalesPoint};
    pub use crate::error::{ForecastError, Result};
    pub use crate::insights::{forecast_insights, ForecastInsights};
    pub use crate::models::{Forecaster, Horizon, LinearGrowth, SeasonalProjector};
    pub use crate::seasonality::{seasonal_indices, SeasonalIndices};
    pub use crate::service::{ForecastRequest, ForecastService, InMemorySalesHistory};
}
