//! Forecaster trait defining the common interface for demand models.

use crate::core::{ForecastPoint, SalesPoint};
use crate::error::Result;
use crate::models::Horizon;

/// Common interface for monthly demand models.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to a monthly sales history.
    fn fit(&mut self, history: &[SalesPoint]) -> Result<()>;

    /// Project demand for the months following the fitted history.
    fn predict(&self, horizon: Horizon) -> Result<Vec<ForecastPoint>>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}
