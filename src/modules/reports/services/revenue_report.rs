//! Platform revenue report across ticket sales, ad boosts, and subscriptions.

use rust_decimal::Decimal;

use crate::core::numeric::decimal_or_zero;
use crate::core::Result;
use crate::modules::reports::models::{
    BoostBreakdown, ReportPeriod, RevenueBreakdown, RevenueCharts, RevenueReport, RevenueSummary,
    SubscriptionBreakdown, TicketBreakdown,
};
use crate::modules::reports::repositories::AnalyticsStore;
use crate::modules::reports::services::time_series::sum_by_day;

/// Platform commission on ticket volume: 5%. A business constant of this
/// report, not a configurable input.
const TICKET_COMMISSION_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
/// Platform commission on boost spend: 15%.
const BOOST_COMMISSION_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Build the revenue report for the given period.
///
/// `restaurant_id` narrows the boost-spend portion only. Subscription revenue
/// is an instantaneous snapshot over currently-subscribed restaurants and is
/// deliberately not scoped to the period.
pub async fn build(
    store: &dyn AnalyticsStore,
    restaurant_id: Option<&str>,
    period: &ReportPeriod,
) -> Result<RevenueReport> {
    let (ticket_sales, boosts, subscriptions) = tokio::try_join!(
        store.ticket_sales_in_period(period),
        store.boosts_in_period(period, restaurant_id),
        store.subscribed_plans(),
    )?;

    let ticket_sales_revenue: Decimal = ticket_sales
        .iter()
        .map(|sale| decimal_or_zero(sale.total_amount))
        .sum();
    let boost_spend_total: Decimal = boosts
        .iter()
        .map(|boost| decimal_or_zero(boost.budget))
        .sum();
    let monthly_subscription_revenue: Decimal = subscriptions
        .iter()
        .map(|sub| decimal_or_zero(sub.monthly_price))
        .sum();

    let platform_boost_commission = boost_spend_total * BOOST_COMMISSION_RATE;
    let total_platform_revenue = ticket_sales_revenue * TICKET_COMMISSION_RATE
        + platform_boost_commission
        + monthly_subscription_revenue;

    let daily_ticket_revenue = sum_by_day(
        &ticket_sales,
        |sale| Some(sale.created_at),
        |sale| decimal_or_zero(sale.total_amount),
    );
    let daily_boost_revenue = sum_by_day(
        &boosts,
        |boost| Some(boost.created_at),
        |boost| decimal_or_zero(boost.budget),
    );

    Ok(RevenueReport {
        summary: RevenueSummary {
            ticket_sales_revenue,
            boost_spend_total,
            platform_boost_commission,
            monthly_subscription_revenue,
            total_platform_revenue,
        },
        breakdown: RevenueBreakdown {
            tickets: TicketBreakdown {
                count: ticket_sales.len() as u64,
                revenue: ticket_sales_revenue,
            },
            boosts: BoostBreakdown {
                count: boosts.len() as u64,
                spend: boost_spend_total,
                commission: platform_boost_commission,
            },
            subscriptions: SubscriptionBreakdown {
                active_count: subscriptions.len() as u64,
                monthly_revenue: monthly_subscription_revenue,
            },
        },
        charts: RevenueCharts {
            daily_ticket_revenue,
            daily_boost_revenue,
        },
        period: *period,
    })
}
