//! Business logic helpers for validated catalog mutations.

use tracing::warn;
use uuid::Uuid;

use forecourt_domain::{CarDetail, Dealership, StockItem};

use crate::error::CoreError;

/// Provides validated mutations for [`CarDetail`] entries.
///
/// Prices are checked here, at the write boundary, so the aggregation engine
/// can assume every catalog price is a finite positive amount.
pub struct CatalogService;

impl CatalogService {
    /// Adds a catalog entry together with its stock row.
    pub fn add_car(
        lot: &mut Dealership,
        name: &str,
        price: f64,
        initial_stock: u32,
    ) -> Result<Uuid, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("car name is required".into()));
        }
        Self::validate_price(price)?;
        Self::validate_name_free(lot, None, name)?;

        let id = lot.add_car(CarDetail::new(name, price));
        lot.add_stock_item(StockItem::new(name, initial_stock));
        Ok(id)
    }

    /// Updates an existing catalog entry's name and/or price.
    ///
    /// Mirrors the catalog-edit contract: the car must exist, supplying the
    /// current values verbatim is rejected as "no changes", and supplying
    /// neither field is rejected as having nothing to update. Renames touch
    /// only the catalog; stock rows and ledger entries keep the old name and
    /// show up in [`crate::audit::dealership_warnings`] until restated.
    pub fn update_details(
        lot: &mut Dealership,
        car_name: &str,
        new_name: Option<&str>,
        new_price: Option<f64>,
    ) -> Result<(), CoreError> {
        let name = car_name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation("car name is required".into()));
        }
        let current = lot
            .car(name)
            .ok_or_else(|| CoreError::CarNotFound(name.to_string()))?;
        let current_id = current.id;
        let current_name = current.name.clone();
        let current_price = current.price;

        let new_name = new_name.map(str::trim).filter(|candidate| !candidate.is_empty());
        if new_name == Some(current_name.as_str()) && new_price == Some(current_price) {
            return Err(CoreError::InvalidOperation("no changes detected".into()));
        }

        let rename = new_name.filter(|candidate| *candidate != current_name);
        let reprice = new_price.filter(|candidate| *candidate != current_price);
        if rename.is_none() && reprice.is_none() {
            return Err(CoreError::InvalidOperation(
                "no valid fields to update".into(),
            ));
        }

        if let Some(price) = reprice {
            Self::validate_price(price)?;
        }
        if let Some(candidate) = rename {
            Self::validate_name_free(lot, Some(current_id), candidate)?;
            if lot.stock_item(candidate).is_none() {
                warn!(car = candidate, "renamed catalog entry has no matching stock row");
            }
        }

        let car = lot
            .car_mut(name)
            .ok_or_else(|| CoreError::CarNotFound(name.to_string()))?;
        if let Some(candidate) = rename {
            car.name = candidate.to_string();
        }
        if let Some(price) = reprice {
            car.price = price;
        }
        lot.touch();
        Ok(())
    }

    /// Returns a snapshot of the catalog entries currently tracked.
    pub fn list(lot: &Dealership) -> Vec<&CarDetail> {
        lot.catalog.iter().collect()
    }

    fn validate_price(price: f64) -> Result<(), CoreError> {
        if price.is_finite() && price > 0.0 {
            Ok(())
        } else {
            Err(CoreError::Validation(
                "price must be a positive amount".into(),
            ))
        }
    }

    fn validate_name_free(
        lot: &Dealership,
        exclude: Option<Uuid>,
        candidate: &str,
    ) -> Result<(), CoreError> {
        let duplicate = lot
            .catalog
            .iter()
            .any(|car| car.name == candidate && exclude != Some(car.id));
        if duplicate {
            Err(CoreError::InvalidOperation(format!(
                "car `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
