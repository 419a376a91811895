use chrono::NaiveDate;
use forecourt_core::{
    CatalogService, FixedClock, PurchaseService, ReportService, StockService,
};
use forecourt_domain::{Dealership, Month};

fn clock_on(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock::on_date(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
}

#[test]
fn purchases_flow_through_to_every_report() {
    let mut lot = Dealership::new("Integration");
    CatalogService::add_car(&mut lot, "sedan", 100.0, 10).expect("seed sedan");
    CatalogService::add_car(&mut lot, "coupe", 250.0, 6).expect("seed coupe");

    PurchaseService::buy(&mut lot, &clock_on(2024, 4, 2), "sedan", 3).expect("april sedan");
    PurchaseService::buy(&mut lot, &clock_on(2024, 5, 9), "coupe", 2).expect("may coupe");
    PurchaseService::buy(&mut lot, &clock_on(2024, 6, 21), "sedan", 1).expect("june sedan");

    let reporting_clock = clock_on(2024, 6, 30);

    let summary = ReportService::rolling_summary(&lot, &reporting_clock);
    let months: Vec<Month> = summary.months.iter().map(|row| row.month).collect();
    assert_eq!(months, vec![Month::June, Month::May, Month::April]);
    assert_eq!(summary.months[0].total_revenue, 100.0);
    assert_eq!(summary.months[1].total_revenue, 500.0);
    assert_eq!(summary.months[2].total_revenue, 300.0);

    let monthly = ReportService::monthly_top_sellers(&lot, &reporting_clock);
    assert_eq!(monthly.len(), 3);
    assert_eq!(monthly[0].month, Month::April);
    assert_eq!(monthly[0].top_cars[0].car_name, "sedan");

    let revenue = ReportService::monthly_top_seller_revenue(&lot, &reporting_clock);
    assert_eq!(
        revenue.get(&Month::May).expect("may present")[0].total_price,
        500.0
    );

    let leaders = ReportService::yearly_leaderboard(&lot, &reporting_clock);
    assert_eq!(leaders[0].car_name, "sedan");
    assert_eq!(leaders[0].total_quantity, 4);
    assert_eq!(leaders[1].car_name, "coupe");
    assert_eq!(leaders[1].total_quantity, 2);
}

#[test]
fn price_edits_retroactively_change_reported_revenue() {
    let mut lot = Dealership::new("Repricing");
    CatalogService::add_car(&mut lot, "sedan", 100.0, 10).expect("seed sedan");
    PurchaseService::buy(&mut lot, &clock_on(2024, 6, 1), "sedan", 2).expect("buy");

    let reporting_clock = clock_on(2024, 6, 15);
    let before = ReportService::rolling_summary(&lot, &reporting_clock);
    assert_eq!(before.months[0].total_revenue, 200.0);

    // Reports price at report time, not at sale time.
    CatalogService::update_details(&mut lot, "sedan", None, Some(150.0)).expect("reprice");
    let after = ReportService::rolling_summary(&lot, &reporting_clock);
    assert_eq!(after.months[0].total_revenue, 300.0);
}

#[test]
fn restock_extends_what_can_be_sold() {
    let mut lot = Dealership::new("Restock");
    CatalogService::add_car(&mut lot, "sedan", 100.0, 1).expect("seed sedan");
    let clock = clock_on(2024, 6, 1);

    PurchaseService::buy(&mut lot, &clock, "sedan", 1).expect("sell the last unit");
    assert!(PurchaseService::buy(&mut lot, &clock, "sedan", 1).is_err());

    StockService::adjust(&mut lot, "sedan", 5).expect("delivery");
    PurchaseService::buy(&mut lot, &clock, "sedan", 2).expect("sell restocked units");
    assert_eq!(StockService::level(&lot, "sedan").expect("level"), 3);
}
