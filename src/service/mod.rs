//! Boundary between the forecasting engine and the application around it.
//!
//! A [`SalesHistorySource`] supplies products and raw sales; the
//! [`ForecastService`] turns them into product forecasts and the
//! cross-category seasonality view.

mod forecast_service;
mod source;

pub use forecast_service::{ForecastRequest, ForecastService};
pub use source::{InMemorySalesHistory, SalesHistorySource};
