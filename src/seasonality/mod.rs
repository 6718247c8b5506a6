//! Seasonality analysis of monthly sales.
//!
//! Seasonal indices express each calendar month's average demand as a
//! multiple of the overall average: 1.0 is an average month, 1.5 a month
//! selling half again as much.

mod index;

pub use index::{seasonal_decomposition, seasonal_indices, SeasonalDecomposition, SeasonalIndices};
