//! Aggregation engine: turns the flat sales ledger into month-bucketed
//! revenue totals and ranked top-seller lists.
//!
//! Every function here is a pure computation over borrowed ledger entries
//! and a price snapshot; nothing is persisted and no shared state exists, so
//! concurrent report requests may run these freely.

use std::collections::BTreeMap;

use forecourt_domain::{CarRevenue, CarSales, Month, MonthlyTopSellers, PriceIndex, SaleRecord};

/// Revenue per requested month.
///
/// Entries are matched by month name alone; the year of an entry is not
/// consulted. Entries whose car is missing from `prices` contribute no term.
/// Every requested month is present in the result, and a month with no
/// revenue-bearing sales totals an explicit 0.0.
pub fn monthly_revenue_window(
    entries: &[&SaleRecord],
    prices: &PriceIndex,
    months: &[Month],
) -> BTreeMap<Month, f64> {
    let mut totals: BTreeMap<Month, f64> = months.iter().map(|month| (*month, 0.0)).collect();
    for sale in entries {
        let Some(total) = totals.get_mut(&sale.month) else {
            continue;
        };
        if let Some(price) = prices.price_of(&sale.car_name) {
            *total += f64::from(sale.quantity) * price;
        }
    }
    totals
}

/// Ranked top sellers per month for one year.
///
/// Quantities are summed per `(month, car)` pair, ranked descending within
/// each month (ties keep first-appearance order), and truncated to `top_n`.
/// Months appear in calendar order; months without sales are omitted.
pub fn top_sellers_by_month(
    entries: &[&SaleRecord],
    year: i32,
    top_n: usize,
) -> Vec<MonthlyTopSellers> {
    let mut by_month: BTreeMap<Month, Vec<CarSales>> = BTreeMap::new();
    for sale in entries.iter().filter(|sale| sale.year == year) {
        let cars = by_month.entry(sale.month).or_default();
        match cars.iter_mut().find(|car| car.car_name == sale.car_name) {
            Some(car) => car.total_quantity += sale.quantity,
            None => cars.push(CarSales {
                car_name: sale.car_name.clone(),
                total_quantity: sale.quantity,
            }),
        }
    }
    by_month
        .into_iter()
        .map(|(month, mut top_cars)| {
            top_cars.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
            top_cars.truncate(top_n);
            MonthlyTopSellers { month, top_cars }
        })
        .collect()
}

/// Attributes revenue to an already-ranked monthly top-seller list.
///
/// Cars without a catalog price are dropped from this view entirely, so a
/// month's revenue list may be shorter than its quantity list.
pub fn attach_revenue(
    monthly: &[MonthlyTopSellers],
    prices: &PriceIndex,
) -> BTreeMap<Month, Vec<CarRevenue>> {
    monthly
        .iter()
        .map(|bucket| {
            let priced = bucket
                .top_cars
                .iter()
                .filter_map(|car| {
                    prices.price_of(&car.car_name).map(|price| CarRevenue {
                        car_name: car.car_name.clone(),
                        total_price: f64::from(car.total_quantity) * price,
                    })
                })
                .collect();
            (bucket.month, priced)
        })
        .collect()
}

/// Highest-selling cars across a whole year, quantity only.
pub fn yearly_top_sellers(entries: &[&SaleRecord], year: i32, top_n: usize) -> Vec<CarSales> {
    let mut totals: Vec<CarSales> = Vec::new();
    for sale in entries.iter().filter(|sale| sale.year == year) {
        match totals.iter_mut().find(|car| car.car_name == sale.car_name) {
            Some(car) => car.total_quantity += sale.quantity,
            None => totals.push(CarSales {
                car_name: sale.car_name.clone(),
                total_quantity: sale.quantity,
            }),
        }
    }
    totals.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    totals.truncate(top_n);
    totals
}
