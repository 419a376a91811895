//! Report output shapes produced by the aggregation engine and facade.
//!
//! All of these are derived per request and never persisted.

use serde::{Deserialize, Serialize};

use crate::month::Month;

/// Revenue total for a single month bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthRevenue {
    pub month: Month,
    pub total_revenue: f64,
}

/// Quantity total for a single car within a ranked list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarSales {
    pub car_name: String,
    pub total_quantity: u32,
}

/// Ranked top sellers for one month, highest quantity first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyTopSellers {
    pub month: Month,
    pub top_cars: Vec<CarSales>,
}

/// Revenue attributed to one ranked car. Cars without a catalog price never
/// appear in this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarRevenue {
    pub car_name: String,
    pub total_price: f64,
}

/// Three-month rolling revenue summary, current month first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RollingSummary {
    pub months: Vec<MonthRevenue>,
}
