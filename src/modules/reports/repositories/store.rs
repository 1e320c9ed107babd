use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::Result;
use crate::modules::reports::models::{
    ActionRecord, AdBoost, Deal, Post, Redemption, ReportPeriod, SubscribedPlan, TicketSale,
    UserProfile,
};

/// Read-only query surface the report builders aggregate over.
///
/// One instance is constructed at startup and shared behind an `Arc`; no
/// method mutates the underlying store. Builders fire independent reads
/// concurrently and combine the returned row sets in memory, so every method
/// returns an owned, self-contained result.
///
/// The query layer cannot filter on a joined table's foreign field, which is
/// why there is no "redemptions for restaurant" read here: callers fetch
/// redemptions, batch-fetch the referenced deals with `deals_by_ids`, and
/// join in memory.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// All-time registered user count
    async fn count_users(&self) -> Result<u64>;

    /// Users whose profile was created within the period
    async fn count_new_users(&self, period: &ReportPeriod) -> Result<u64>;

    /// All-time restaurant count
    async fn count_restaurants(&self) -> Result<u64>;

    /// Flagged content still awaiting review, unbounded by date
    async fn count_pending_flags(&self) -> Result<u64>;

    /// Events starting at or after `from`, with no upper bound
    async fn count_upcoming_events(&self, from: DateTime<Utc>) -> Result<u64>;

    /// Posts created within the period
    async fn posts_in_period(&self, period: &ReportPeriod) -> Result<Vec<Post>>;

    /// Posts tagging the given restaurant, created within the period
    async fn restaurant_posts_in_period(
        &self,
        restaurant_id: &str,
        period: &ReportPeriod,
    ) -> Result<Vec<Post>>;

    /// Redemptions claimed within the period, regardless of status
    async fn redemptions_claimed_in_period(&self, period: &ReportPeriod)
        -> Result<Vec<Redemption>>;

    /// Batch fetch of deals by id, for in-memory joins
    async fn deals_by_ids(&self, ids: &[String]) -> Result<Vec<Deal>>;

    /// Deals owned by the restaurant that have no expiry or expire at/after `now`
    async fn active_deals(&self, restaurant_id: &str, now: DateTime<Utc>) -> Result<Vec<Deal>>;

    /// Ticket sales recorded within the period
    async fn ticket_sales_in_period(&self, period: &ReportPeriod) -> Result<Vec<TicketSale>>;

    /// Every boost the restaurant has ever purchased
    async fn restaurant_boosts(&self, restaurant_id: &str) -> Result<Vec<AdBoost>>;

    /// Boosts created within the period, optionally scoped to one restaurant
    async fn boosts_in_period(
        &self,
        period: &ReportPeriod,
        restaurant_id: Option<&str>,
    ) -> Result<Vec<AdBoost>>;

    /// Restaurants currently holding a plan, joined to the plan's monthly price
    async fn subscribed_plans(&self) -> Result<Vec<SubscribedPlan>>;

    /// Likes created within the period
    async fn likes_in_period(&self, period: &ReportPeriod) -> Result<Vec<ActionRecord>>;

    /// Comments created within the period
    async fn comments_in_period(&self, period: &ReportPeriod) -> Result<Vec<ActionRecord>>;

    /// Stories created within the period
    async fn stories_in_period(&self, period: &ReportPeriod) -> Result<Vec<ActionRecord>>;

    /// Batch fetch of user profiles by id; unknown ids are simply absent
    async fn profiles_by_ids(&self, ids: &[String]) -> Result<Vec<UserProfile>>;
}
