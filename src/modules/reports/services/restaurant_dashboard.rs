//! Dashboard scoped to a single restaurant.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::core::numeric::{decimal_or_zero, metric_or_zero, percentage_2dp, whole_percentage};
use crate::core::Result;
use crate::modules::reports::models::{
    RedemptionStatus, ReportPeriod, RestaurantCharts, RestaurantDashboardReport,
    RestaurantOverview,
};
use crate::modules::reports::repositories::AnalyticsStore;
use crate::modules::reports::services::time_series::count_by_day;

/// Build the dashboard for one restaurant over the given period.
///
/// Redemptions are fetched platform-wide and narrowed in memory: the store
/// cannot filter on the joined deal's restaurant, so the builder batch-fetches
/// the referenced deals and keeps only redemptions whose deal belongs to the
/// scope. Boost totals are all-time for the restaurant, not period-bound.
pub async fn build(
    store: &dyn AnalyticsStore,
    restaurant_id: &str,
    period: &ReportPeriod,
    now: DateTime<Utc>,
) -> Result<RestaurantDashboardReport> {
    let (active_deals, redemptions, posts, boosts) = tokio::try_join!(
        store.active_deals(restaurant_id, now),
        store.redemptions_claimed_in_period(period),
        store.restaurant_posts_in_period(restaurant_id, period),
        store.restaurant_boosts(restaurant_id),
    )?;

    // Join step: redemption -> deal -> owning restaurant.
    let mut deal_ids: Vec<String> = redemptions.iter().map(|r| r.deal_id.clone()).collect();
    deal_ids.sort();
    deal_ids.dedup();
    let deals = store.deals_by_ids(&deal_ids).await?;

    let owned_deal_ids: HashSet<&str> = deals
        .iter()
        .filter(|deal| deal.restaurant_id == restaurant_id)
        .map(|deal| deal.id.as_str())
        .collect();
    let scoped: Vec<_> = redemptions
        .iter()
        .filter(|r| owned_deal_ids.contains(r.deal_id.as_str()))
        .collect();

    let total_claims = scoped.len() as u64;
    let completed_redemptions = scoped
        .iter()
        .filter(|r| r.status == RedemptionStatus::Redeemed)
        .count() as u64;

    let unique_creators = posts
        .iter()
        .map(|post| post.author_id.as_str())
        .collect::<HashSet<_>>()
        .len() as u64;

    let total_boost_spend: Decimal = boosts
        .iter()
        .map(|boost| decimal_or_zero(boost.budget))
        .sum();
    let impressions: Decimal = boosts
        .iter()
        .map(|boost| metric_or_zero(boost.metrics.as_ref(), "impressions"))
        .sum();
    let clicks: Decimal = boosts
        .iter()
        .map(|boost| metric_or_zero(boost.metrics.as_ref(), "clicks"))
        .sum();

    // Claims never redeemed stay out of the series but still count above.
    let daily_redemptions = count_by_day(&scoped, |r| r.redeemed_at);

    Ok(RestaurantDashboardReport {
        overview: RestaurantOverview {
            active_deals: active_deals.len() as u64,
            total_claims,
            completed_redemptions,
            redemption_rate: whole_percentage(completed_redemptions, total_claims),
            ugc_posts: posts.len() as u64,
            unique_creators,
            total_boost_spend,
            total_impressions: impressions.round().to_u64().unwrap_or(0),
            total_clicks: clicks.round().to_u64().unwrap_or(0),
            ctr: percentage_2dp(clicks, impressions),
        },
        deals: active_deals,
        charts: RestaurantCharts { daily_redemptions },
        period: *period,
    })
}
