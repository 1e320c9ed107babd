//! Platform-wide dashboard for back-office admins.

use crate::core::numeric::{decimal_or_zero, whole_percentage};
use crate::core::Result;
use crate::modules::reports::models::{
    AdminCharts, AdminDashboardReport, AdminOverview, RedemptionStatus, ReportPeriod,
};
use crate::modules::reports::repositories::AnalyticsStore;
use crate::modules::reports::services::time_series::count_by_day;

/// Build the admin dashboard for the given period.
///
/// The seven primary reads are independent and fired concurrently; the
/// new-user count is issued once they resolve. Redemption rows are kept whole
/// rather than counted in the store because the redemption rate needs the
/// redeemed/claimed split.
pub async fn build(
    store: &dyn AnalyticsStore,
    period: &ReportPeriod,
) -> Result<AdminDashboardReport> {
    let (total_users, total_restaurants, posts, redemptions, upcoming_events, ticket_sales, pending_flags) =
        tokio::try_join!(
            store.count_users(),
            store.count_restaurants(),
            store.posts_in_period(period),
            store.redemptions_claimed_in_period(period),
            store.count_upcoming_events(period.from),
            store.ticket_sales_in_period(period),
            store.count_pending_flags(),
        )?;

    let new_users = store.count_new_users(period).await?;

    let redeemed = redemptions
        .iter()
        .filter(|r| r.status == RedemptionStatus::Redeemed)
        .count() as u64;
    let total_redemptions = redemptions.len() as u64;

    let ticket_revenue = ticket_sales
        .iter()
        .map(|sale| decimal_or_zero(sale.total_amount))
        .sum();

    let daily_activity = count_by_day(&posts, |post| Some(post.created_at));

    Ok(AdminDashboardReport {
        overview: AdminOverview {
            total_users,
            new_users,
            total_restaurants,
            posts_this_period: posts.len() as u64,
            total_redemptions,
            redemption_rate: whole_percentage(redeemed, total_redemptions),
            upcoming_events,
            ticket_revenue,
            pending_flags,
        },
        charts: AdminCharts { daily_activity },
        period: *period,
    })
}
