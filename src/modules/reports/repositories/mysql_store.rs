// MySQL implementation of the analytics read surface.
//
// Queries are plain SELECTs over the product's tables using runtime-bound
// statements. Range filters are inclusive on both ends. Batch lookups use a
// QueryBuilder IN list and short-circuit on empty input.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, MySqlPool, QueryBuilder};

use crate::core::Result;
use crate::modules::reports::models::{
    ActionRecord, AdBoost, Deal, Post, Redemption, ReportPeriod, SubscribedPlan, TicketSale,
    UserProfile,
};
use crate::modules::reports::repositories::AnalyticsStore;

pub struct MySqlAnalyticsStore {
    pool: MySqlPool,
}

impl MySqlAnalyticsStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn count_all(&self, sql: &str) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn count_in_range(&self, sql: &str, period: &ReportPeriod) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(sql)
            .bind(period.from)
            .bind(period.to)
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn actions_in_range(&self, table: &str, period: &ReportPeriod) -> Result<Vec<ActionRecord>> {
        let sql = format!(
            "SELECT id, user_id, created_at FROM {} WHERE created_at >= ? AND created_at <= ?",
            table
        );
        let rows = sqlx::query_as::<_, ActionRecord>(&sql)
            .bind(period.from)
            .bind(period.to)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl AnalyticsStore for MySqlAnalyticsStore {
    async fn count_users(&self) -> Result<u64> {
        self.count_all("SELECT COUNT(*) FROM user_profiles").await
    }

    async fn count_new_users(&self, period: &ReportPeriod) -> Result<u64> {
        self.count_in_range(
            "SELECT COUNT(*) FROM user_profiles WHERE created_at >= ? AND created_at <= ?",
            period,
        )
        .await
    }

    async fn count_restaurants(&self) -> Result<u64> {
        self.count_all("SELECT COUNT(*) FROM restaurants").await
    }

    async fn count_pending_flags(&self) -> Result<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM flagged_content WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn count_upcoming_events(&self, from: DateTime<Utc>) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE starts_at >= ?")
            .bind(from)
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn posts_in_period(&self, period: &ReportPeriod) -> Result<Vec<Post>> {
        let rows = sqlx::query_as::<_, Post>(
            "SELECT id, author_id, restaurant_id, deal_id, created_at FROM posts \
             WHERE created_at >= ? AND created_at <= ?",
        )
        .bind(period.from)
        .bind(period.to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn restaurant_posts_in_period(
        &self,
        restaurant_id: &str,
        period: &ReportPeriod,
    ) -> Result<Vec<Post>> {
        let rows = sqlx::query_as::<_, Post>(
            "SELECT id, author_id, restaurant_id, deal_id, created_at FROM posts \
             WHERE restaurant_id = ? AND created_at >= ? AND created_at <= ?",
        )
        .bind(restaurant_id)
        .bind(period.from)
        .bind(period.to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn redemptions_claimed_in_period(
        &self,
        period: &ReportPeriod,
    ) -> Result<Vec<Redemption>> {
        let rows = sqlx::query_as::<_, Redemption>(
            "SELECT id, deal_id, user_id, claimed_at, redeemed_at, status FROM deal_redemptions \
             WHERE claimed_at >= ? AND claimed_at <= ?",
        )
        .bind(period.from)
        .bind(period.to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn deals_by_ids(&self, ids: &[String]) -> Result<Vec<Deal>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<MySql>::new(
            "SELECT id, restaurant_id, discount_percent, expires_at, max_redemptions \
             FROM deals WHERE id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");

        let rows = builder
            .build_query_as::<Deal>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn active_deals(&self, restaurant_id: &str, now: DateTime<Utc>) -> Result<Vec<Deal>> {
        let rows = sqlx::query_as::<_, Deal>(
            "SELECT id, restaurant_id, discount_percent, expires_at, max_redemptions FROM deals \
             WHERE restaurant_id = ? AND (expires_at IS NULL OR expires_at >= ?)",
        )
        .bind(restaurant_id)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn ticket_sales_in_period(&self, period: &ReportPeriod) -> Result<Vec<TicketSale>> {
        let rows = sqlx::query_as::<_, TicketSale>(
            "SELECT id, event_id, user_id, quantity, unit_price, total_amount, created_at \
             FROM ticket_sales WHERE created_at >= ? AND created_at <= ?",
        )
        .bind(period.from)
        .bind(period.to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn restaurant_boosts(&self, restaurant_id: &str) -> Result<Vec<AdBoost>> {
        let rows = sqlx::query_as::<_, AdBoost>(
            "SELECT id, restaurant_id, budget, status, metrics, created_at FROM ad_boosts \
             WHERE restaurant_id = ?",
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn boosts_in_period(
        &self,
        period: &ReportPeriod,
        restaurant_id: Option<&str>,
    ) -> Result<Vec<AdBoost>> {
        let mut builder = QueryBuilder::<MySql>::new(
            "SELECT id, restaurant_id, budget, status, metrics, created_at FROM ad_boosts \
             WHERE created_at >= ",
        );
        builder.push_bind(period.from);
        builder.push(" AND created_at <= ");
        builder.push_bind(period.to);
        if let Some(restaurant_id) = restaurant_id {
            builder.push(" AND restaurant_id = ");
            builder.push_bind(restaurant_id);
        }

        let rows = builder
            .build_query_as::<AdBoost>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn subscribed_plans(&self) -> Result<Vec<SubscribedPlan>> {
        let rows = sqlx::query_as::<_, SubscribedPlan>(
            "SELECT r.id AS restaurant_id, p.monthly_price FROM restaurants r \
             JOIN subscription_plans p ON r.plan_id = p.id \
             WHERE r.plan_id IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn likes_in_period(&self, period: &ReportPeriod) -> Result<Vec<ActionRecord>> {
        self.actions_in_range("likes", period).await
    }

    async fn comments_in_period(&self, period: &ReportPeriod) -> Result<Vec<ActionRecord>> {
        self.actions_in_range("comments", period).await
    }

    async fn stories_in_period(&self, period: &ReportPeriod) -> Result<Vec<ActionRecord>> {
        self.actions_in_range("stories", period).await
    }

    async fn profiles_by_ids(&self, ids: &[String]) -> Result<Vec<UserProfile>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<MySql>::new(
            "SELECT id, display_name, avatar_url, points, created_at FROM user_profiles \
             WHERE id IN (",
        );
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");

        let rows = builder
            .build_query_as::<UserProfile>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
