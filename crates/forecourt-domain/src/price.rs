//! Per-report price snapshot built from the catalog.

use std::collections::HashMap;

use crate::car::CarDetail;

/// Ephemeral `name -> unit price` snapshot. Rebuilt from the full catalog on
/// every report request; never persisted.
#[derive(Debug, Clone, Default)]
pub struct PriceIndex {
    prices: HashMap<String, f64>,
}

impl PriceIndex {
    pub fn from_catalog(catalog: &[CarDetail]) -> Self {
        let prices = catalog
            .iter()
            .map(|car| (car.name.clone(), car.price))
            .collect();
        Self { prices }
    }

    /// Current unit price for the car, or `None` when the car has no
    /// catalog entry.
    pub fn price_of(&self, car_name: &str) -> Option<f64> {
        self.prices.get(car_name).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
