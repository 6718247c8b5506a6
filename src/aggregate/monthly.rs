//! Monthly aggregation of a single product's sales.

use crate::core::{SaleRecord, SalesPoint, YearMonth};
use crate::error::{ForecastError, Result};
use chrono::{Months, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Group sales by calendar month, ascending by (year, month).
///
/// Returns an empty vector for empty input; the forecasting stages reject
/// that with [`ForecastError::NoHistoricalData`].
pub fn aggregate_monthly(records: &[SaleRecord]) -> Vec<SalesPoint> {
    aggregate(records.iter())
}

/// Like [`aggregate_monthly`], keeping only sales on or after `cutoff`.
pub fn aggregate_monthly_since(records: &[SaleRecord], cutoff: NaiveDate) -> Vec<SalesPoint> {
    aggregate(records.iter().filter(|r| r.date >= cutoff))
}

fn aggregate<'a>(records: impl Iterator<Item = &'a SaleRecord>) -> Vec<SalesPoint> {
    let mut months: BTreeMap<YearMonth, SalesPoint> = BTreeMap::new();
    let mut seen = 0usize;

    for record in records {
        seen += 1;
        let period = YearMonth::of(record.date);
        let entry = months.entry(period).or_insert(SalesPoint {
            year: period.year,
            month: period.month,
            total_units: 0,
            holiday_units: 0,
            transactions: 0,
        });
        let quantity = u64::from(record.quantity);
        entry.total_units += quantity;
        if record.is_holiday {
            entry.holiday_units += quantity;
        }
        entry.transactions += 1;
    }

    debug!(records = seen, months = months.len(), "aggregated monthly sales");
    months.into_values().collect()
}

/// Start date of a history window reaching `years` back from `today`.
///
/// Feb 29 maps to Feb 28 in non-leap target years.
pub fn history_cutoff(today: NaiveDate, years: u32) -> Result<NaiveDate> {
    years
        .checked_mul(12)
        .and_then(|months| today.checked_sub_months(Months::new(months)))
        .ok_or_else(|| {
            ForecastError::InvalidParameter(format!("history window of {years} years is out of range"))
        })
}

/// Most recent month present in the history, whatever order the points are in.
pub fn latest_period(points: &[SalesPoint]) -> Result<YearMonth> {
    points
        .iter()
        .map(SalesPoint::period)
        .max()
        .ok_or_else(ForecastError::no_history)
}

/// Check that a supplied history is non-empty, strictly ascending and well formed.
pub fn validate_history(points: &[SalesPoint]) -> Result<()> {
    if points.is_empty() {
        return Err(ForecastError::no_history());
    }
    for point in points {
        point.validate()?;
    }
    for pair in points.windows(2) {
        if pair[0].period() >= pair[1].period() {
            return Err(ForecastError::InvalidSalesPoint(format!(
                "history is not strictly ascending: {} followed by {}",
                pair[0].period(),
                pair[1].period()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn groups_by_month_and_sorts() {
        let records = vec![
            SaleRecord::new(date(2023, 3, 10), 4),
            SaleRecord::new(date(2022, 12, 1), 7),
            SaleRecord::new(date(2023, 3, 2), 6),
            SaleRecord::new(date(2022, 12, 25), 3).on_holiday("Christmas"),
        ];

        let points = aggregate_monthly(&records);
        assert_eq!(points.len(), 2);

        assert_eq!(points[0].period(), YearMonth::new(2022, 12).unwrap());
        assert_eq!(points[0].total_units, 10);
        assert_eq!(points[0].holiday_units, 3);
        assert_eq!(points[0].transactions, 2);

        assert_eq!(points[1].period(), YearMonth::new(2023, 3).unwrap());
        assert_eq!(points[1].total_units, 10);
        assert_eq!(points[1].holiday_units, 0);
        assert_eq!(points[1].average_units(), 5.0);
    }

    #[test]
    fn empty_input_yields_no_points() {
        assert!(aggregate_monthly(&[]).is_empty());
        assert_eq!(
            latest_period(&[]),
            Err(ForecastError::NoHistoricalData { product_id: None })
        );
    }

    #[test]
    fn latest_period_ignores_point_order() {
        let points = vec![
            SalesPoint::new(2023, 9, 1, 0).unwrap(),
            SalesPoint::new(2024, 2, 1, 0).unwrap(),
            SalesPoint::new(2023, 11, 1, 0).unwrap(),
        ];
        assert_eq!(latest_period(&points), Ok(YearMonth::new(2024, 2).unwrap()));
        assert_eq!(
            latest_period(&points),
            crate::seasonality::seasonal_decomposition(&points).map(|d| d.latest)
        );
    }

    #[test]
    fn same_month_in_different_years_stays_separate() {
        let records = vec![
            SaleRecord::new(date(2022, 6, 1), 1),
            SaleRecord::new(date(2023, 6, 1), 2),
        ];
        let points = aggregate_monthly(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].year, 2022);
        assert_eq!(points[1].year, 2023);
    }

    #[test]
    fn window_filters_older_sales() {
        let records = vec![
            SaleRecord::new(date(2020, 1, 15), 50),
            SaleRecord::new(date(2023, 5, 1), 5),
        ];
        let cutoff = history_cutoff(date(2024, 5, 1), 2).unwrap();
        assert_eq!(cutoff, date(2022, 5, 1));

        let points = aggregate_monthly_since(&records, cutoff);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].total_units, 5);
    }

    #[test]
    fn cutoff_clamps_leap_day() {
        assert_eq!(history_cutoff(date(2024, 2, 29), 1).unwrap(), date(2023, 2, 28));
        assert_eq!(history_cutoff(date(2024, 2, 29), 4).unwrap(), date(2020, 2, 29));
    }

    #[test]
    fn validate_history_rejects_disorder() {
        let a = SalesPoint::new(2023, 2, 1, 0).unwrap();
        let b = SalesPoint::new(2023, 1, 1, 0).unwrap();
        assert!(validate_history(&[a]).is_ok());
        assert!(matches!(
            validate_history(&[a, b]),
            Err(ForecastError::InvalidSalesPoint(_))
        ));
        assert!(matches!(
            validate_history(&[a, a]),
            Err(ForecastError::InvalidSalesPoint(_))
        ));
        assert!(matches!(
            validate_history(&[]),
            Err(ForecastError::NoHistoricalData { .. })
        ));
    }
}
