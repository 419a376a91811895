//! Validated stock-level adjustments outside the purchase flow.

use forecourt_domain::Dealership;

use crate::error::CoreError;

/// Restocks and corrections. Purchases draw stock down through
/// [`crate::PurchaseService`]; everything else goes through here.
pub struct StockService;

impl StockService {
    /// Applies a signed adjustment to a car's stock level and returns the
    /// new level. Deliveries pass a positive delta; corrections may pass a
    /// negative one, but the level can never drop below zero.
    pub fn adjust(lot: &mut Dealership, car_name: &str, delta: i64) -> Result<u32, CoreError> {
        let name = car_name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("car name is required".into()));
        }
        if delta == 0 {
            return Err(CoreError::Validation(
                "adjustment quantity is required".into(),
            ));
        }

        let item = lot
            .stock_item_mut(name)
            .ok_or_else(|| CoreError::CarNotFound(name.to_string()))?;
        let adjusted = i64::from(item.stock) + delta;
        if adjusted < 0 {
            return Err(CoreError::InvalidOperation(format!(
                "stock for `{}` cannot drop below zero",
                name
            )));
        }
        item.stock = adjusted as u32;
        let level = item.stock;
        lot.touch();
        Ok(level)
    }

    /// Current stock level for a car.
    pub fn level(lot: &Dealership, car_name: &str) -> Result<u32, CoreError> {
        lot.stock_item(car_name)
            .map(|item| item.stock)
            .ok_or_else(|| CoreError::CarNotFound(car_name.to_string()))
    }
}
