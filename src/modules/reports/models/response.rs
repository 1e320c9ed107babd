// Wire shapes for the four report documents.
//
// The dashboard UI renders `overview`, `charts`, `breakdown`, `deals`, and
// `top_creators` fields directly, so field names here are the API contract.
// Day-bucket maps carry keys only for days with at least one qualifying
// record; consumers treat missing days as zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entities::Deal;
use super::request::ReportPeriod;

/// Day string ("YYYY-MM-DD") to occurrence count
pub type DailyCounts = BTreeMap<String, u64>;
/// Day string ("YYYY-MM-DD") to accumulated amount
pub type DailyAmounts = BTreeMap<String, Decimal>;

/// A generated report of any kind, serialized verbatim as the response body
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Admin(AdminDashboardReport),
    Restaurant(RestaurantDashboardReport),
    Revenue(RevenueReport),
    Engagement(UserEngagementReport),
}

// ---------------------------------------------------------------------------
// Admin dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboardReport {
    pub overview: AdminOverview,
    pub charts: AdminCharts,
    pub period: ReportPeriod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOverview {
    pub total_users: u64,
    pub new_users: u64,
    pub total_restaurants: u64,
    pub posts_this_period: u64,
    pub total_redemptions: u64,
    /// Percentage of claims that reached "redeemed", 0 when no claims
    pub redemption_rate: u32,
    pub upcoming_events: u64,
    pub ticket_revenue: Decimal,
    pub pending_flags: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCharts {
    pub daily_activity: DailyCounts,
}

// ---------------------------------------------------------------------------
// Restaurant dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantDashboardReport {
    pub overview: RestaurantOverview,
    pub deals: Vec<Deal>,
    pub charts: RestaurantCharts,
    pub period: ReportPeriod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantOverview {
    pub active_deals: u64,
    pub total_claims: u64,
    pub completed_redemptions: u64,
    pub redemption_rate: u32,
    pub ugc_posts: u64,
    pub unique_creators: u64,
    pub total_boost_spend: Decimal,
    pub total_impressions: u64,
    pub total_clicks: u64,
    /// Click-through rate percentage to 2 decimal places, 0 when no impressions
    pub ctr: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCharts {
    /// Keyed by redeemed timestamp; claims never redeemed are absent here
    pub daily_redemptions: DailyCounts,
}

// ---------------------------------------------------------------------------
// Revenue report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueReport {
    pub summary: RevenueSummary,
    pub breakdown: RevenueBreakdown,
    pub charts: RevenueCharts,
    pub period: ReportPeriod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub ticket_sales_revenue: Decimal,
    pub boost_spend_total: Decimal,
    pub platform_boost_commission: Decimal,
    /// Present-day snapshot over currently-subscribed restaurants, not
    /// scoped to the requested period
    pub monthly_subscription_revenue: Decimal,
    pub total_platform_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub tickets: TicketBreakdown,
    pub boosts: BoostBreakdown,
    pub subscriptions: SubscriptionBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketBreakdown {
    pub count: u64,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostBreakdown {
    pub count: u64,
    pub spend: Decimal,
    pub commission: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionBreakdown {
    pub active_count: u64,
    pub monthly_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueCharts {
    pub daily_ticket_revenue: DailyAmounts,
    pub daily_boost_revenue: DailyAmounts,
}

// ---------------------------------------------------------------------------
// User engagement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEngagementReport {
    pub overview: EngagementOverview,
    pub top_creators: Vec<TopCreator>,
    pub charts: EngagementCharts,
    pub period: ReportPeriod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementOverview {
    /// Distinct users acting across posts, likes, comments, stories, and
    /// redemptions; a user counts once however many actions they performed
    pub active_users: u64,
    pub total_posts: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_stories: u64,
    pub total_redemptions: u64,
    pub avg_engagement_per_post: Decimal,
}

/// Leaderboard entry; profile fields stay absent when the profile lookup
/// found no matching user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopCreator {
    pub user_id: String,
    pub post_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementCharts {
    pub daily_posts: DailyCounts,
    pub daily_engagement: DailyCounts,
}
