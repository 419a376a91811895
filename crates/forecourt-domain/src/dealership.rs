//! The dealership aggregate: catalog, stock, and the sales ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::car::{CarDetail, StockItem};
use crate::month::Month;
use crate::price::PriceIndex;
use crate::sale::SaleRecord;

/// A named lot owning the three collections the reporting engine reads.
///
/// `SaleRecord.car_name` is a soft reference into `catalog` and `stock`:
/// nothing enforces integrity, and a sale for a car missing from the catalog
/// simply contributes no revenue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dealership {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub catalog: Vec<CarDetail>,
    #[serde(default)]
    pub stock: Vec<StockItem>,
    #[serde(default)]
    pub sales: Vec<SaleRecord>,
}

impl Dealership {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created_at: now,
            updated_at: now,
            catalog: Vec::new(),
            stock: Vec::new(),
            sales: Vec::new(),
        }
    }

    /// Bumps the modification timestamp after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn add_car(&mut self, car: CarDetail) -> Uuid {
        let id = car.id;
        self.catalog.push(car);
        self.touch();
        id
    }

    pub fn add_stock_item(&mut self, item: StockItem) -> Uuid {
        let id = item.id;
        self.stock.push(item);
        self.touch();
        id
    }

    pub fn car(&self, name: &str) -> Option<&CarDetail> {
        self.catalog.iter().find(|car| car.name == name)
    }

    pub fn car_mut(&mut self, name: &str) -> Option<&mut CarDetail> {
        self.catalog.iter_mut().find(|car| car.name == name)
    }

    pub fn stock_item(&self, name: &str) -> Option<&StockItem> {
        self.stock.iter().find(|item| item.name == name)
    }

    pub fn stock_item_mut(&mut self, name: &str) -> Option<&mut StockItem> {
        self.stock.iter_mut().find(|item| item.name == name)
    }

    /// Appends a sale to the ledger. Entries are never edited or removed.
    pub fn record_sale(&mut self, sale: SaleRecord) -> Uuid {
        let id = sale.id;
        self.sales.push(sale);
        self.touch();
        id
    }

    /// Ledger entries whose month name is in `months`, from any year.
    pub fn sales_in_months(&self, months: &[Month]) -> Vec<&SaleRecord> {
        self.sales
            .iter()
            .filter(|sale| months.contains(&sale.month))
            .collect()
    }

    /// Ledger entries recorded during `year`.
    pub fn sales_in_year(&self, year: i32) -> Vec<&SaleRecord> {
        self.sales.iter().filter(|sale| sale.year == year).collect()
    }

    /// Fresh price snapshot over the current catalog.
    pub fn price_index(&self) -> PriceIndex {
        PriceIndex::from_catalog(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn lot_with_sales() -> Dealership {
        let mut lot = Dealership::new("Test Lot");
        lot.add_car(CarDetail::new("sedan", 100.0));
        lot.add_stock_item(StockItem::new("sedan", 5));
        lot.record_sale(SaleRecord::new(
            "sedan",
            2,
            NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date"),
        ));
        lot.record_sale(SaleRecord::new(
            "sedan",
            1,
            NaiveDate::from_ymd_opt(2023, 3, 20).expect("valid date"),
        ));
        lot.record_sale(SaleRecord::new(
            "sedan",
            4,
            NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date"),
        ));
        lot
    }

    #[test]
    fn sales_in_months_matches_by_name_across_years() {
        let lot = lot_with_sales();
        let march = lot.sales_in_months(&[Month::March]);
        assert_eq!(march.len(), 2);
        assert!(march.iter().all(|sale| sale.month == Month::March));
    }

    #[test]
    fn sales_in_year_scopes_by_year() {
        let lot = lot_with_sales();
        let current = lot.sales_in_year(2024);
        assert_eq!(current.len(), 2);
        assert!(current.iter().all(|sale| sale.year == 2024));
    }

    #[test]
    fn round_trips_through_json() {
        let lot = lot_with_sales();
        let json = serde_json::to_string(&lot).expect("serialize");
        let loaded: Dealership = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loaded.name, lot.name);
        assert_eq!(loaded.catalog, lot.catalog);
        assert_eq!(loaded.sales, lot.sales);
    }
}
