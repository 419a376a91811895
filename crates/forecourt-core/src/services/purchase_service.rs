//! Validated purchase flow: record the sale and draw down stock together.

use tracing::info;
use uuid::Uuid;

use forecourt_domain::{Dealership, SaleRecord};

use crate::error::CoreError;
use crate::time::Clock;

/// Provides the single write path for purchases.
///
/// All checks run before the first mutation, and the ledger append plus the
/// stock decrement land in the same aggregate borrow, so a purchase either
/// records the sale and draws down stock or does neither.
pub struct PurchaseService;

impl PurchaseService {
    /// Records a purchase of `quantity` units, stamping the ledger entry
    /// with the month and year supplied by `clock`.
    pub fn buy(
        lot: &mut Dealership,
        clock: &dyn Clock,
        car_name: &str,
        quantity: u32,
    ) -> Result<Uuid, CoreError> {
        let name = car_name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("car name is required".into()));
        }
        if quantity == 0 {
            return Err(CoreError::Validation(
                "quantity must be greater than zero".into(),
            ));
        }

        let today = clock.today();
        let item = lot
            .stock_item_mut(name)
            .ok_or_else(|| CoreError::CarNotFound(name.to_string()))?;
        if item.stock == 0 {
            return Err(CoreError::OutOfStock(name.to_string()));
        }
        if item.stock < quantity {
            return Err(CoreError::InsufficientStock {
                car: name.to_string(),
                requested: quantity,
                available: item.stock,
            });
        }
        item.stock -= quantity;

        let id = lot.record_sale(SaleRecord::new(name, quantity, today));
        info!(car = name, quantity, "purchase recorded");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use forecourt_domain::{CarDetail, Month, StockItem};

    use crate::time::FixedClock;

    fn stocked_lot() -> Dealership {
        let mut lot = Dealership::new("Purchases");
        lot.add_car(CarDetail::new("sedan", 100.0));
        lot.add_stock_item(StockItem::new("sedan", 5));
        lot
    }

    fn march_clock() -> FixedClock {
        FixedClock::on_date(NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"))
    }

    #[test]
    fn buy_records_sale_and_decrements_stock() {
        let mut lot = stocked_lot();
        let id = PurchaseService::buy(&mut lot, &march_clock(), "sedan", 2).expect("buy succeeds");

        assert_eq!(lot.stock_item("sedan").expect("stock present").stock, 3);
        let sale = lot.sales.iter().find(|sale| sale.id == id).expect("sale recorded");
        assert_eq!(sale.quantity, 2);
        assert_eq!(sale.month, Month::March);
        assert_eq!(sale.year, 2024);
    }

    #[test]
    fn buy_rejects_missing_fields() {
        let mut lot = stocked_lot();
        let err = PurchaseService::buy(&mut lot, &march_clock(), "  ", 1)
            .expect_err("blank name must fail");
        assert!(matches!(err, CoreError::Validation(_)), "unexpected error: {err:?}");

        let err = PurchaseService::buy(&mut lot, &march_clock(), "sedan", 0)
            .expect_err("zero quantity must fail");
        assert!(matches!(err, CoreError::Validation(_)), "unexpected error: {err:?}");
        assert!(lot.sales.is_empty());
    }

    #[test]
    fn buy_rejects_unknown_car_without_mutation() {
        let mut lot = stocked_lot();
        let err = PurchaseService::buy(&mut lot, &march_clock(), "hovercar", 1)
            .expect_err("unknown car must fail");
        assert!(matches!(err, CoreError::CarNotFound(_)), "unexpected error: {err:?}");
        assert!(lot.sales.is_empty());
    }

    #[test]
    fn buy_rejects_empty_and_short_stock_without_mutation() {
        let mut lot = stocked_lot();
        let err = PurchaseService::buy(&mut lot, &march_clock(), "sedan", 9)
            .expect_err("short stock must fail");
        assert!(
            matches!(
                err,
                CoreError::InsufficientStock {
                    requested: 9,
                    available: 5,
                    ..
                }
            ),
            "unexpected error: {err:?}"
        );
        assert_eq!(lot.stock_item("sedan").expect("stock present").stock, 5);
        assert!(lot.sales.is_empty());

        lot.stock_item_mut("sedan").expect("stock present").stock = 0;
        let err = PurchaseService::buy(&mut lot, &march_clock(), "sedan", 1)
            .expect_err("empty stock must fail");
        assert!(matches!(err, CoreError::OutOfStock(_)), "unexpected error: {err:?}");
        assert!(lot.sales.is_empty());
    }

    #[test]
    fn buy_does_not_require_a_catalog_entry() {
        // Stock and catalog are soft-linked; a car can be sellable while its
        // catalog entry is missing, and the sale then carries no revenue.
        let mut lot = Dealership::new("NoCatalog");
        lot.add_stock_item(StockItem::new("gray-import", 2));

        PurchaseService::buy(&mut lot, &march_clock(), "gray-import", 1).expect("buy succeeds");
        assert_eq!(lot.sales.len(), 1);
    }
}
