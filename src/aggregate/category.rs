//! Month-of-year sales profiles compared across product categories.

use crate::core::{CategorySale, MONTH_NAMES};
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Category reported for sales without one.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Twelve-month profile per category, January first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySeasonality {
    profiles: BTreeMap<String, [f64; 12]>,
}

impl CategorySeasonality {
    /// Sum units per category and calendar month, pooling all years.
    pub fn from_sales(sales: &[CategorySale]) -> Self {
        let mut profiles: BTreeMap<String, [f64; 12]> = BTreeMap::new();
        for sale in sales {
            let category = sale.category.as_deref().unwrap_or(UNKNOWN_CATEGORY);
            let profile = profiles.entry(category.to_string()).or_insert([0.0; 12]);
            profile[sale.date.month0() as usize] += f64::from(sale.quantity);
        }
        debug!(
            sales = sales.len(),
            categories = profiles.len(),
            "aggregated category seasonality"
        );
        Self { profiles }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn profile(&self, category: &str) -> Option<&[f64; 12]> {
        self.profiles.get(category)
    }

    /// Divide each profile by its own average over the twelve months.
    ///
    /// A category with no sales keeps its all-zero profile.
    pub fn normalized(&self) -> Self {
        let profiles = self
            .profiles
            .iter()
            .map(|(category, totals)| {
                let average = totals.iter().sum::<f64>() / 12.0;
                let mut profile = *totals;
                if average > 0.0 {
                    profile.iter_mut().for_each(|v| *v /= average);
                }
                (category.clone(), profile)
            })
            .collect();
        Self { profiles }
    }

    /// One row per calendar month mapping category name to value.
    pub fn rows(&self) -> Vec<CategorySeasonalityRow> {
        MONTH_NAMES
            .iter()
            .enumerate()
            .map(|(idx, month)| CategorySeasonalityRow {
                month: (*month).to_string(),
                values: self
                    .profiles
                    .iter()
                    .map(|(category, profile)| (category.clone(), profile[idx]))
                    .collect(),
            })
            .collect()
    }
}

/// A chart row: the month name plus one value per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeasonalityRow {
    pub month: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

/// Normalized month-of-year comparison of every category in `sales`.
pub fn category_seasonality(sales: &[CategorySale]) -> Vec<CategorySeasonalityRow> {
    CategorySeasonality::from_sales(sales).normalized().rows()
}
