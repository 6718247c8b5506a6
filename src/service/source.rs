//! Sales history providers.

use crate::core::{CategorySale, HolidayCalendar, ProductSummary, SaleRecord};
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Supplies products and their recorded sales.
pub trait SalesHistorySource {
    /// Look up a product, `None` when it does not exist.
    fn product(&self, product_id: &str) -> Result<Option<ProductSummary>>;

    /// All recorded sales of a product, in any order.
    fn sales(&self, product_id: &str) -> Result<Vec<SaleRecord>>;

    /// Every sale tagged with its product's category.
    fn category_sales(&self) -> Result<Vec<CategorySale>>;
}

impl<S: SalesHistorySource + ?Sized> SalesHistorySource for &S {
    fn product(&self, product_id: &str) -> Result<Option<ProductSummary>> {
        (**self).product(product_id)
    }

    fn sales(&self, product_id: &str) -> Result<Vec<SaleRecord>> {
        (**self).sales(product_id)
    }

    fn category_sales(&self) -> Result<Vec<CategorySale>> {
        (**self).category_sales()
    }
}

/// In-memory history for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemorySalesHistory {
    products: BTreeMap<String, ProductSummary>,
    sales: BTreeMap<String, Vec<SaleRecord>>,
    calendar: HolidayCalendar,
}

impl InMemorySalesHistory {
    /// Empty history using the default holiday calendar.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calendar(calendar: HolidayCalendar) -> Self {
        Self {
            calendar,
            ..Self::default()
        }
    }

    /// Register or replace a product.
    pub fn add_product(&mut self, product: ProductSummary) {
        self.products.insert(product.id.clone(), product);
    }

    /// Record a sale, flagging it against the holiday calendar.
    pub fn record_sale(
        &mut self,
        product_id: &str,
        date: NaiveDate,
        quantity: u32,
    ) -> Result<&SaleRecord> {
        if !self.products.contains_key(product_id) {
            return Err(ForecastError::NotFound {
                product_id: product_id.to_string(),
            });
        }
        let record = self.calendar.tag(date, quantity);
        let entries = self.sales.entry(product_id.to_string()).or_default();
        entries.push(record);
        Ok(&entries[entries.len() - 1])
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

impl SalesHistorySource for InMemorySalesHistory {
    fn product(&self, product_id: &str) -> Result<Option<ProductSummary>> {
        Ok(self.products.get(product_id).cloned())
    }

    fn sales(&self, product_id: &str) -> Result<Vec<SaleRecord>> {
        Ok(self.sales.get(product_id).cloned().unwrap_or_default())
    }

    fn category_sales(&self) -> Result<Vec<CategorySale>> {
        Ok(self
            .sales
            .iter()
            .flat_map(|(product_id, records)| {
                let category = self.products.get(product_id).map(|p| p.category.clone());
                records.iter().map(move |r| CategorySale {
                    category: category.clone(),
                    date: r.date,
                    quantity: r.quantity,
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn history() -> InMemorySalesHistory {
        let mut history = InMemorySalesHistory::new();
        history.add_product(ProductSummary::new("p1", "Catnip", "CN-1", "Toys"));
        history.add_product(ProductSummary::new("p2", "Kibble", "KB-2", "Food"));
        history
    }

    #[test]
    fn record_sale_tags_holidays() {
        let mut history = history();
        let sale = history.record_sale("p1", date(2023, 12, 25), 4).unwrap();
        assert!(sale.is_holiday);
        assert_eq!(sale.holiday_name.as_deref(), Some("Christmas"));

        let sale = history.record_sale("p1", date(2023, 12, 26), 1).unwrap();
        assert!(!sale.is_holiday);

        assert_eq!(history.sales("p1").unwrap().len(), 2);
    }

    #[test]
    fn record_sale_requires_product() {
        let mut history = history();
        assert_eq!(
            history.record_sale("missing", date(2023, 1, 1), 1).unwrap_err(),
            ForecastError::NotFound {
                product_id: "missing".to_string()
            }
        );
    }

    #[test]
    fn lookups() {
        let history = history();
        assert_eq!(history.product_count(), 2);
        assert_eq!(history.product("p2").unwrap().unwrap().sku, "KB-2");
        assert_eq!(history.product("nope").unwrap(), None);
        assert!(history.sales("p2").unwrap().is_empty());
    }

    #[test]
    fn category_sales_join_product_category() {
        let mut history = history();
        history.record_sale("p1", date(2023, 3, 1), 2).unwrap();
        history.record_sale("p2", date(2023, 4, 1), 5).unwrap();

        let sales = history.category_sales().unwrap();
        assert_eq!(sales.len(), 2);
        assert!(sales
            .iter()
            .any(|s| s.category.as_deref() == Some("Toys") && s.quantity == 2));
        assert!(sales
            .iter()
            .any(|s| s.category.as_deref() == Some("Food") && s.quantity == 5));
    }

    #[test]
    fn custom_calendar() {
        let calendar = HolidayCalendar::empty();
        let mut history = InMemorySalesHistory::with_calendar(calendar);
        history.add_product(ProductSummary::new("p1", "Catnip", "CN-1", "Toys"));
        let sale = history.record_sale("p1", date(2023, 12, 25), 1).unwrap();
        assert!(!sale.is_holiday);
    }
}
