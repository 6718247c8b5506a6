//! Error types for the petsupply-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while aggregating sales or producing a forecast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The referenced product does not exist.
    #[error("product not found: {product_id}")]
    NotFound { product_id: String },

    /// The product exists but has no recorded sales to learn from.
    #[error("no sales history found{}", for_product_suffix(.product_id))]
    NoHistoricalData { product_id: Option<String> },

    /// The requested horizon could not be interpreted as a month count.
    #[error("invalid horizon: {0:?}")]
    InvalidHorizon(String),

    /// A calendar month outside 1..=12.
    #[error("invalid month: {month} (expected 1-12)")]
    InvalidMonth { month: u32 },

    /// A monthly aggregate violates the history contract.
    #[error("invalid sales point: {0}")]
    InvalidSalesPoint(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// The sales history provider failed.
    #[error("sales history unavailable: {0}")]
    Source(String),

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

fn for_product_suffix(product_id: &Option<String>) -> String {
    product_id
        .as_deref()
        .map(|id| format!(" for product {id}"))
        .unwrap_or_default()
}

impl ForecastError {
    pub(crate) fn no_history() -> Self {
        ForecastError::NoHistoricalData { product_id: None }
    }

    /// Attach a product id to a `NoHistoricalData` error raised by the pure engine.
    pub fn for_product(self, product_id: &str) -> Self {
        match self {
            ForecastError::NoHistoricalData { product_id: None } => {
                ForecastError::NoHistoricalData {
                    product_id: Some(product_id.to_string()),
                }
            }
            other => other,
        }
    }
}
