//! Aggregation of raw sales into monthly series.
//!
//! - [`monthly`]: per-product calendar-month totals with holiday sub-totals
//! - [`category`]: cross-category month-of-year profiles

pub mod category;
pub mod monthly;

pub use category::{category_seasonality, CategorySeasonality, CategorySeasonalityRow};
pub use monthly::{
    aggregate_monthly, aggregate_monthly_since, history_cutoff, latest_period, validate_history,
};
