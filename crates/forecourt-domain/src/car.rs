//! Catalog entries and inventory levels.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable, NamedEntity};

/// Catalog entry for a car model. The price is the current unit price;
/// revenue reports always use the price in effect at report time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarDetail {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

impl CarDetail {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
        }
    }
}

impl Identifiable for CarDetail {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for CarDetail {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for CarDetail {
    fn display_label(&self) -> String {
        format!("{} @ {:.2}", self.name, self.price)
    }
}

/// Current inventory level for a car. Never negative; decrements happen
/// together with the sale that consumes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockItem {
    pub id: Uuid,
    pub name: String,
    pub stock: u32,
}

impl StockItem {
    pub fn new(name: impl Into<String>, stock: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            stock,
        }
    }
}

impl Identifiable for StockItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for StockItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for StockItem {
    fn display_label(&self) -> String {
        format!("{} x{}", self.name, self.stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_expose_identity_and_labels() {
        let car = CarDetail::new("sedan", 1250.0);
        let item = StockItem::new("sedan", 7);

        assert_ne!(car.id(), item.id());
        assert_eq!(car.name(), item.name());
        assert_eq!(car.display_label(), "sedan @ 1250.00");
        assert_eq!(item.display_label(), "sedan x7");
    }
}
