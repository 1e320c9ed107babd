//! Revenue report builder: the three revenue sources and their commissions.

#[path = "../helpers/mod.rs"]
mod helpers;

use rust_decimal_macros::dec;

use dinesight::reports::services::revenue_report;
use helpers::*;

#[tokio::test]
async fn worked_example_ticket_and_boost_commissions() {
    // 3 ticket sales [100, 50, 25] and 2 boosts [200, 300], no subscribers.
    let store = FixtureStore {
        ticket_sales: vec![
            ticket_sale("t1", Some(dec!(100)), "2026-01-05T10:00:00Z"),
            ticket_sale("t2", Some(dec!(50)), "2026-01-06T10:00:00Z"),
            ticket_sale("t3", Some(dec!(25)), "2026-01-07T10:00:00Z"),
        ],
        boosts: vec![
            boost("b1", "r1", Some(dec!(200)), None, "2026-01-05T10:00:00Z"),
            boost("b2", "r2", Some(dec!(300)), None, "2026-01-06T10:00:00Z"),
        ],
        ..FixtureStore::default()
    };

    let report = revenue_report::build(&store, None, &january()).await.unwrap();

    let summary = &report.summary;
    assert_eq!(summary.ticket_sales_revenue, dec!(175));
    assert_eq!(summary.boost_spend_total, dec!(500));
    assert_eq!(summary.platform_boost_commission, dec!(75.00));
    assert_eq!(summary.monthly_subscription_revenue, dec!(0));
    assert_eq!(summary.total_platform_revenue, dec!(83.75)); // 175*0.05 + 75
}

#[tokio::test]
async fn total_revenue_identity_holds_with_subscriptions() {
    let store = FixtureStore {
        ticket_sales: vec![ticket_sale("t1", Some(dec!(400)), "2026-01-05T10:00:00Z")],
        boosts: vec![boost("b1", "r1", Some(dec!(100)), None, "2026-01-05T10:00:00Z")],
        subscriptions: vec![
            subscription("r1", Some(dec!(29.99))),
            subscription("r2", Some(dec!(49.99))),
            subscription("r3", None), // defensive: missing price contributes 0
        ],
        ..FixtureStore::default()
    };

    let report = revenue_report::build(&store, None, &january()).await.unwrap();
    let summary = &report.summary;

    // Recompute independently: 5% of tickets + 15% of boosts + subscriptions.
    let expected = summary.ticket_sales_revenue * dec!(0.05)
        + summary.boost_spend_total * dec!(0.15)
        + summary.monthly_subscription_revenue;
    assert_eq!(summary.total_platform_revenue, expected);
    assert_eq!(summary.monthly_subscription_revenue, dec!(79.98));
    assert_eq!(report.breakdown.subscriptions.active_count, 3);
}

#[tokio::test]
async fn subscription_snapshot_ignores_the_requested_period() {
    // Zero-width range: every period-bound figure collapses to zero while
    // the recurring-revenue snapshot stays current.
    let store = FixtureStore {
        ticket_sales: vec![ticket_sale("t1", Some(dec!(400)), "2026-01-05T10:00:00Z")],
        subscriptions: vec![subscription("r1", Some(dec!(19.99)))],
        ..FixtureStore::default()
    };

    let instant = ts("2026-01-01T00:00:00Z");
    let period = dinesight::reports::models::ReportPeriod::new(instant, instant);
    let report = revenue_report::build(&store, None, &period).await.unwrap();

    assert_eq!(report.summary.ticket_sales_revenue, dec!(0));
    assert_eq!(report.summary.boost_spend_total, dec!(0));
    assert_eq!(report.summary.monthly_subscription_revenue, dec!(19.99));
    assert_eq!(report.summary.total_platform_revenue, dec!(19.99));
    assert!(report.charts.daily_ticket_revenue.is_empty());
    assert!(report.charts.daily_boost_revenue.is_empty());
}

#[tokio::test]
async fn restaurant_scope_narrows_boost_spend_only() {
    let store = FixtureStore {
        ticket_sales: vec![ticket_sale("t1", Some(dec!(100)), "2026-01-05T10:00:00Z")],
        boosts: vec![
            boost("b1", "r1", Some(dec!(200)), None, "2026-01-05T10:00:00Z"),
            boost("b2", "r2", Some(dec!(300)), None, "2026-01-06T10:00:00Z"),
        ],
        ..FixtureStore::default()
    };

    let report = revenue_report::build(&store, Some("r1"), &january())
        .await
        .unwrap();

    assert_eq!(report.summary.boost_spend_total, dec!(200));
    assert_eq!(report.summary.platform_boost_commission, dec!(30.00));
    // Ticket revenue is platform-wide regardless of the scope.
    assert_eq!(report.summary.ticket_sales_revenue, dec!(100));
    assert_eq!(report.breakdown.boosts.count, 1);
}

#[tokio::test]
async fn daily_revenue_series_sum_per_calendar_day() {
    let store = FixtureStore {
        ticket_sales: vec![
            ticket_sale("t1", Some(dec!(100)), "2026-01-05T08:00:00Z"),
            ticket_sale("t2", Some(dec!(50)), "2026-01-05T20:00:00Z"),
            ticket_sale("t3", Some(dec!(25)), "2026-01-07T10:00:00Z"),
        ],
        boosts: vec![boost("b1", "r1", Some(dec!(200)), None, "2026-01-06T10:00:00Z")],
        ..FixtureStore::default()
    };

    let report = revenue_report::build(&store, None, &january()).await.unwrap();

    assert_eq!(report.charts.daily_ticket_revenue["2026-01-05"], dec!(150));
    assert_eq!(report.charts.daily_ticket_revenue["2026-01-07"], dec!(25));
    assert!(!report.charts.daily_ticket_revenue.contains_key("2026-01-06"));
    assert_eq!(report.charts.daily_boost_revenue["2026-01-06"], dec!(200));
}

#[tokio::test]
async fn breakdown_mirrors_summary_figures() {
    let store = FixtureStore {
        ticket_sales: vec![
            ticket_sale("t1", Some(dec!(100)), "2026-01-05T10:00:00Z"),
            ticket_sale("t2", None, "2026-01-06T10:00:00Z"), // malformed → 0
        ],
        boosts: vec![boost("b1", "r1", Some(dec!(80)), None, "2026-01-05T10:00:00Z")],
        subscriptions: vec![subscription("r1", Some(dec!(10)))],
        ..FixtureStore::default()
    };

    let report = revenue_report::build(&store, None, &january()).await.unwrap();

    assert_eq!(report.breakdown.tickets.count, 2);
    assert_eq!(report.breakdown.tickets.revenue, dec!(100));
    assert_eq!(report.breakdown.boosts.spend, report.summary.boost_spend_total);
    assert_eq!(
        report.breakdown.boosts.commission,
        report.summary.platform_boost_commission
    );
    assert_eq!(report.breakdown.subscriptions.monthly_revenue, dec!(10));
}
