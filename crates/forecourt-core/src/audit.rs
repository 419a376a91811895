use std::collections::HashSet;

use forecourt_domain::Dealership;

/// Detects dangling references and other anomalies within a lot snapshot.
///
/// Sale entries reference cars by name with no integrity enforcement, so a
/// renamed or deleted catalog entry silently stops contributing revenue.
/// This reports such rows without repairing them.
pub fn dealership_warnings(lot: &Dealership) -> Vec<String> {
    let catalog_names: HashSet<&str> = lot.catalog.iter().map(|car| car.name.as_str()).collect();
    let stock_names: HashSet<&str> = lot.stock.iter().map(|item| item.name.as_str()).collect();
    let mut warnings = Vec::new();

    for sale in &lot.sales {
        if !catalog_names.contains(sale.car_name.as_str()) {
            warnings.push(format!(
                "sale {} references car `{}` with no catalog entry; it contributes no revenue",
                sale.id, sale.car_name
            ));
        }
    }
    for item in &lot.stock {
        if !catalog_names.contains(item.name.as_str()) {
            warnings.push(format!(
                "stock item `{}` has no catalog entry and cannot be priced",
                item.name
            ));
        }
    }
    for car in &lot.catalog {
        if !stock_names.contains(car.name.as_str()) {
            warnings.push(format!(
                "catalog entry `{}` has no stock record and cannot be sold",
                car.name
            ));
        }
        if !(car.price.is_finite() && car.price > 0.0) {
            warnings.push(format!(
                "catalog entry `{}` has a non-positive price ({})",
                car.name, car.price
            ));
        }
    }
    warnings
}
