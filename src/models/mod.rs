//! Demand forecasting models.

mod horizon;
mod projector;
mod traits;
mod trend;

pub use horizon::Horizon;
pub use projector::{SeasonalProjector, SeasonalTrendModel, DEFAULT_CONFIDENCE_BAND};
pub use traits::Forecaster;
pub use trend::{LinearGrowth, NoTrend, TrendModel, DEFAULT_ANNUAL_GROWTH};
