//! Month-of-year seasonal indices.

use crate::core::{SalesPoint, YearMonth, MONTH_NAMES};
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Twelve demand multipliers, January first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonalIndices([f64; 12]);

impl SeasonalIndices {
    /// Every month at 1.0.
    pub fn neutral() -> Self {
        Self([1.0; 12])
    }

    /// Wrap precomputed indices, rejecting negative or non-finite values.
    pub fn from_values(values: [f64; 12]) -> Result<Self> {
        if let Some((idx, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(ForecastError::InvalidParameter(format!(
                "seasonal index for {} must be finite and non-negative, got {v}",
                MONTH_NAMES[idx]
            )));
        }
        Ok(Self(values))
    }

    /// Index for a 1-based calendar month.
    pub fn for_month(&self, month: u32) -> Result<f64> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidMonth { month });
        }
        Ok(self.0[(month - 1) as usize])
    }

    pub fn values(&self) -> &[f64; 12] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl Default for SeasonalIndices {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Seasonal indices together with the statistics they were derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalDecomposition {
    pub indices: SeasonalIndices,
    /// Mean monthly units across the whole history.
    pub overall_mean: f64,
    /// Mean units per calendar month, `None` where the month never occurs.
    pub monthly_means: [Option<f64>; 12],
    /// Most recent month in the history.
    pub latest: YearMonth,
    /// Number of monthly points used.
    pub observations: usize,
}

/// Derive seasonal indices from a monthly history.
///
/// Months absent from the history get a neutral 1.0, as do all months when
/// the overall mean is zero. Points may arrive in any order but must each
/// pass [`SalesPoint::validate`].
pub fn seasonal_decomposition(points: &[SalesPoint]) -> Result<SeasonalDecomposition> {
    points.iter().try_for_each(SalesPoint::validate)?;

    let latest = points
        .iter()
        .map(SalesPoint::period)
        .max()
        .ok_or_else(ForecastError::no_history)?;

    let mut totals = [0.0_f64; 12];
    let mut counts = [0usize; 12];
    for point in points {
        let idx = point.period().month_index()?;
        totals[idx] += point.total_units as f64;
        counts[idx] += 1;
    }

    let mut monthly_means = [None; 12];
    for m in 0..12 {
        if counts[m] > 0 {
            monthly_means[m] = Some(totals[m] / counts[m] as f64);
        }
    }

    let overall_mean = totals.iter().sum::<f64>() / points.len() as f64;

    let mut indices = [1.0_f64; 12];
    if overall_mean > 0.0 {
        for (index, mean) in indices.iter_mut().zip(monthly_means.iter()) {
            if let Some(mean) = mean {
                *index = mean / overall_mean;
            }
        }
    }

    Ok(SeasonalDecomposition {
        indices: SeasonalIndices(indices),
        overall_mean,
        monthly_means,
        latest,
        observations: points.len(),
    })
}

/// Seasonal indices only; see [`seasonal_decomposition`].
pub fn seasonal_indices(points: &[SalesPoint]) -> Result<SeasonalIndices> {
    seasonal_decomposition(points).map(|d| d.indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn year_of(values: [u64; 12], year: i32) -> Vec<SalesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| SalesPoint::new(year, i as u32 + 1, v, 0).unwrap())
            .collect()
    }

    #[test]
    fn december_peak_indices() {
        let mut values = [100; 12];
        values[11] = 200;
        let decomposition = seasonal_decomposition(&year_of(values, 2023)).unwrap();

        let overall = 1300.0 / 12.0;
        assert_relative_eq!(decomposition.overall_mean, overall, epsilon = 1e-10);
        assert_relative_eq!(
            decomposition.indices.for_month(12).unwrap(),
            200.0 / overall,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            decomposition.indices.for_month(1).unwrap(),
            100.0 / overall,
            epsilon = 1e-10
        );
        assert_relative_eq!(decomposition.indices.for_month(12).unwrap(), 1.846, epsilon = 1e-3);
        assert_relative_eq!(decomposition.indices.for_month(1).unwrap(), 0.923, epsilon = 1e-3);
        assert_eq!(decomposition.latest, YearMonth::new(2023, 12).unwrap());
        assert_eq!(decomposition.observations, 12);
    }

    #[test]
    fn flat_history_is_neutral() {
        let indices = seasonal_indices(&year_of([40; 12], 2022)).unwrap();
        for v in indices.iter() {
            assert_relative_eq!(v, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_demand_is_neutral() {
        let decomposition = seasonal_decomposition(&year_of([0; 12], 2022)).unwrap();
        assert_eq!(decomposition.overall_mean, 0.0);
        assert_eq!(decomposition.indices, SeasonalIndices::neutral());
    }

    #[test]
    fn unobserved_months_default_to_one() {
        let points = vec![
            SalesPoint::new(2023, 1, 10, 0).unwrap(),
            SalesPoint::new(2023, 2, 30, 0).unwrap(),
        ];
        let decomposition = seasonal_decomposition(&points).unwrap();
        assert_relative_eq!(decomposition.indices.for_month(1).unwrap(), 0.5);
        assert_relative_eq!(decomposition.indices.for_month(2).unwrap(), 1.5);
        for month in 3..=12 {
            assert_eq!(decomposition.indices.for_month(month).unwrap(), 1.0);
            assert_eq!(decomposition.monthly_means[month as usize - 1], None);
        }
    }

    #[test]
    fn repeated_months_are_averaged() {
        let points = vec![
            SalesPoint::new(2022, 6, 10, 0).unwrap(),
            SalesPoint::new(2022, 7, 20, 0).unwrap(),
            SalesPoint::new(2023, 6, 30, 0).unwrap(),
        ];
        let decomposition = seasonal_decomposition(&points).unwrap();
        assert_eq!(decomposition.monthly_means[5], Some(20.0));
        assert_relative_eq!(decomposition.overall_mean, 20.0);
        assert_relative_eq!(decomposition.indices.for_month(6).unwrap(), 1.0);
        assert_eq!(decomposition.latest, YearMonth::new(2023, 6).unwrap());
    }

    #[test]
    fn empty_history_is_rejected() {
        assert_eq!(
            seasonal_indices(&[]),
            Err(ForecastError::NoHistoricalData { product_id: None })
        );
    }

    #[test]
    fn out_of_range_months_are_rejected() {
        let json = r#"{"year":2023,"month":13,"totalUnits":5,"holidayUnits":0,"transactions":1}"#;
        let december_plus_one: SalesPoint = serde_json::from_str(json).unwrap();
        assert_eq!(
            seasonal_indices(&[december_plus_one]),
            Err(ForecastError::InvalidMonth { month: 13 })
        );

        let month_zero = SalesPoint {
            year: 2023,
            month: 0,
            total_units: 5,
            holiday_units: 0,
            transactions: 1,
        };
        assert_eq!(
            seasonal_decomposition(&[month_zero]),
            Err(ForecastError::InvalidMonth { month: 0 })
        );
    }

    #[test]
    fn excess_holiday_units_are_rejected() {
        let point = SalesPoint {
            year: 2023,
            month: 12,
            total_units: 5,
            holiday_units: 9,
            transactions: 1,
        };
        assert!(matches!(
            seasonal_indices(&[point]),
            Err(ForecastError::InvalidSalesPoint(_))
        ));
    }

    #[test]
    fn unordered_history_is_accepted() {
        let points = vec![
            SalesPoint::new(2023, 6, 10, 0).unwrap(),
            SalesPoint::new(2022, 6, 30, 0).unwrap(),
        ];
        let decomposition = seasonal_decomposition(&points).unwrap();
        assert_eq!(decomposition.latest, YearMonth::new(2023, 6).unwrap());
    }

    #[test]
    fn from_values_rejects_negative() {
        let mut values = [1.0; 12];
        values[3] = -0.5;
        assert!(matches!(
            SeasonalIndices::from_values(values),
            Err(ForecastError::InvalidParameter(_))
        ));
        values[3] = f64::NAN;
        assert!(SeasonalIndices::from_values(values).is_err());
    }

    #[test]
    fn for_month_rejects_out_of_range() {
        let indices = SeasonalIndices::neutral();
        assert_eq!(indices.for_month(0), Err(ForecastError::InvalidMonth { month: 0 }));
    }

    #[test]
    fn serializes_as_plain_array() {
        let json = serde_json::to_string(&SeasonalIndices::neutral()).unwrap();
        assert!(json.starts_with("[1.0,"));
    }
}
