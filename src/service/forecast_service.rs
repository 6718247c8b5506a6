//! Product forecasts and category seasonality over a sales history source.

use crate::aggregate::{
    aggregate_monthly, aggregate_monthly_since, category_seasonality, history_cutoff,
    CategorySeasonalityRow,
};
use crate::config::ForecastConfig;
use crate::core::{ProductForecast, ProductSummary, SalesPoint};
use crate::error::{ForecastError, Result};
use crate::insights::{forecast_insights, ForecastInsights};
use crate::models::{Horizon, LinearGrowth, SeasonalProjector};
use crate::service::SalesHistorySource;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Caller parameters for a single product forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    /// Raw horizon input; the configured default applies when absent.
    pub horizon: Option<String>,
    /// Limit history to the last N years, overriding the configuration.
    pub history_years: Option<u32>,
    /// Reference date for the history window.
    pub today: NaiveDate,
}

impl ForecastRequest {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            horizon: None,
            history_years: None,
            today,
        }
    }

    pub fn horizon(mut self, horizon: impl Into<String>) -> Self {
        self.horizon = Some(horizon.into());
        self
    }

    pub fn history_years(mut self, years: u32) -> Self {
        self.history_years = Some(years);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ForecastService<S> {
    source: S,
    config: ForecastConfig,
    projector: SeasonalProjector<LinearGrowth>,
}

impl<S: SalesHistorySource> ForecastService<S> {
    /// Service with the default configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: ForecastConfig::default(),
            projector: SeasonalProjector::new(),
        }
    }

    /// Service with a validated configuration.
    pub fn with_config(source: S, config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        let projector = config.projector()?;
        Ok(Self {
            source,
            config,
            projector,
        })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Monthly totals of one product's sales within the request's history window.
    ///
    /// Fails with [`ForecastError::NotFound`] for an unknown product; a product
    /// without sales yields an empty history.
    pub fn aggregated_sales(
        &self,
        product_id: &str,
        request: &ForecastRequest,
    ) -> Result<Vec<SalesPoint>> {
        self.require_product(product_id)?;
        self.monthly_history(product_id, request)
    }

    fn require_product(&self, product_id: &str) -> Result<ProductSummary> {
        self.source.product(product_id)?.ok_or_else(|| {
            warn!(product_id, "unknown product requested");
            ForecastError::NotFound {
                product_id: product_id.to_string(),
            }
        })
    }

    fn monthly_history(
        &self,
        product_id: &str,
        request: &ForecastRequest,
    ) -> Result<Vec<SalesPoint>> {
        let records = self.source.sales(product_id)?;
        Ok(match request.history_years.or(self.config.history_years) {
            Some(years) => aggregate_monthly_since(&records, history_cutoff(request.today, years)?),
            None => aggregate_monthly(&records),
        })
    }

    /// Forecast one product's monthly demand.
    ///
    /// Fails with [`ForecastError::NotFound`] for an unknown product and with
    /// [`ForecastError::NoHistoricalData`] when it has no sales in the window.
    pub fn forecast_product(
        &self,
        product_id: &str,
        request: &ForecastRequest,
    ) -> Result<ProductForecast> {
        let product = self.require_product(product_id)?;
        let historical_data = self.monthly_history(product_id, request)?;
        if historical_data.is_empty() {
            warn!(product_id, "no sales history to forecast from");
            return Err(ForecastError::NoHistoricalData {
                product_id: Some(product_id.to_string()),
            });
        }

        let horizon = match request.horizon.as_deref() {
            Some(raw) => Horizon::parse(raw)?,
            None => self.config.default_horizon()?,
        };

        let (decomposition, forecast) = self
            .projector
            .forecast(&historical_data, horizon)
            .map_err(|e| e.for_product(product_id))?;

        debug!(
            product_id,
            points = historical_data.len(),
            latest = %decomposition.latest,
            overall_mean = decomposition.overall_mean,
            "seasonal decomposition complete"
        );
        info!(product_id, horizon = horizon.months(), "generated forecast");

        Ok(ProductForecast {
            product,
            seasonal_indices: decomposition.indices,
            historical_data,
            forecast,
        })
    }

    /// Planning insights for a forecast produced by this service.
    pub fn insights(&self, forecast: &ProductForecast) -> ForecastInsights {
        forecast_insights(
            &forecast.seasonal_indices,
            &forecast.forecast,
            &self.config.insight_options(),
        )
    }

    /// Normalized month-of-year profiles for every product category.
    pub fn seasonal_patterns(&self) -> Result<Vec<CategorySeasonalityRow>> {
        let sales = self.source.category_sales()?;
        Ok(category_seasonality(&sales))
    }
}
