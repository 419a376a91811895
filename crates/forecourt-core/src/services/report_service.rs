//! Assembles the public report shapes from the aggregation engine.

use std::collections::BTreeMap;

use chrono::Datelike;

use forecourt_domain::{
    CarRevenue, CarSales, Dealership, Month, MonthRevenue, MonthlyTopSellers, RollingSummary,
};

use crate::aggregation;
use crate::time::Clock;

/// Ranked list length for the per-month reports.
pub const TOP_CARS_PER_MONTH: usize = 3;
/// Ranked list length for the yearly leaderboard.
pub const YEARLY_LEADERBOARD_SIZE: usize = 4;

/// Read-only report assembly over a lot. Every call builds its own price
/// snapshot and working collections, so concurrent report requests never
/// share state.
pub struct ReportService;

impl ReportService {
    /// Revenue for the current month and the two before it, current first.
    ///
    /// The window is resolved by month name alone, so ledger entries from
    /// earlier years land in the same bucket as this year's.
    pub fn rolling_summary(lot: &Dealership, clock: &dyn Clock) -> RollingSummary {
        let current = Month::from_date(clock.today());
        let window = [current, current.back(1), current.back(2)];
        let prices = lot.price_index();
        let entries = lot.sales_in_months(&window);
        let mut totals = aggregation::monthly_revenue_window(&entries, &prices, &window);

        let months = window
            .iter()
            .map(|month| MonthRevenue {
                month: *month,
                total_revenue: totals.remove(month).unwrap_or(0.0),
            })
            .collect();
        RollingSummary { months }
    }

    /// Calendar-ordered top sellers per month of the current year, by
    /// quantity.
    pub fn monthly_top_sellers(lot: &Dealership, clock: &dyn Clock) -> Vec<MonthlyTopSellers> {
        let year = clock.today().year();
        let entries = lot.sales_in_year(year);
        aggregation::top_sellers_by_month(&entries, year, TOP_CARS_PER_MONTH)
    }

    /// The monthly top-seller list with revenue attributed from the current
    /// catalog; cars without a price are dropped from this view.
    pub fn monthly_top_seller_revenue(
        lot: &Dealership,
        clock: &dyn Clock,
    ) -> BTreeMap<Month, Vec<CarRevenue>> {
        let monthly = Self::monthly_top_sellers(lot, clock);
        aggregation::attach_revenue(&monthly, &lot.price_index())
    }

    /// The current year's highest-selling cars, quantity only.
    pub fn yearly_leaderboard(lot: &Dealership, clock: &dyn Clock) -> Vec<CarSales> {
        let year = clock.today().year();
        let entries = lot.sales_in_year(year);
        aggregation::yearly_top_sellers(&entries, year, YEARLY_LEADERBOARD_SIZE)
    }
}
