//! Core data structures for sales history and forecasts.

mod calendar;
mod forecast;
mod sales;

pub use calendar::{HolidayCalendar, DEFAULT_HOLIDAYS};
pub use forecast::{ForecastPoint, ProductForecast, ProductSummary};
pub use sales::{month_name, CategorySale, SaleRecord, SalesPoint, YearMonth, MONTH_NAMES};
