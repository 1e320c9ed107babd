use async_trait::async_trait;
use chrono::{DateTime, Utc};

use dinesight::core::{AppError, Result};
use dinesight::reports::models::{
    ActionRecord, AdBoost, Deal, Post, Redemption, ReportPeriod, SubscribedPlan, TicketSale,
    UserProfile,
};
use dinesight::reports::repositories::AnalyticsStore;

/// In-memory `AnalyticsStore` seeded with entity rows.
///
/// Filtering semantics mirror the MySQL implementation: range filters are
/// inclusive on both ends, redemptions filter by claim timestamp, active
/// deals by nullable expiry. Setting `fail_reads` makes every read reject,
/// for exercising the all-or-nothing error path.
#[derive(Default)]
pub struct FixtureStore {
    pub users: Vec<UserProfile>,
    pub restaurant_count: u64,
    pub pending_flag_count: u64,
    pub event_starts: Vec<DateTime<Utc>>,
    pub posts: Vec<Post>,
    pub deals: Vec<Deal>,
    pub redemptions: Vec<Redemption>,
    pub ticket_sales: Vec<TicketSale>,
    pub boosts: Vec<AdBoost>,
    pub subscriptions: Vec<SubscribedPlan>,
    pub likes: Vec<ActionRecord>,
    pub comments: Vec<ActionRecord>,
    pub stories: Vec<ActionRecord>,
    pub fail_reads: bool,
}

impl FixtureStore {
    fn guard(&self) -> Result<()> {
        if self.fail_reads {
            Err(AppError::internal("fixture store: simulated read failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AnalyticsStore for FixtureStore {
    async fn count_users(&self) -> Result<u64> {
        self.guard()?;
        Ok(self.users.len() as u64)
    }

    async fn count_new_users(&self, period: &ReportPeriod) -> Result<u64> {
        self.guard()?;
        Ok(self
            .users
            .iter()
            .filter(|u| period.contains(u.created_at))
            .count() as u64)
    }

    async fn count_restaurants(&self) -> Result<u64> {
        self.guard()?;
        Ok(self.restaurant_count)
    }

    async fn count_pending_flags(&self) -> Result<u64> {
        self.guard()?;
        Ok(self.pending_flag_count)
    }

    async fn count_upcoming_events(&self, from: DateTime<Utc>) -> Result<u64> {
        self.guard()?;
        Ok(self.event_starts.iter().filter(|&&s| s >= from).count() as u64)
    }

    async fn posts_in_period(&self, period: &ReportPeriod) -> Result<Vec<Post>> {
        self.guard()?;
        Ok(self
            .posts
            .iter()
            .filter(|p| period.contains(p.created_at))
            .cloned()
            .collect())
    }

    async fn restaurant_posts_in_period(
        &self,
        restaurant_id: &str,
        period: &ReportPeriod,
    ) -> Result<Vec<Post>> {
        self.guard()?;
        Ok(self
            .posts
            .iter()
            .filter(|p| {
                p.restaurant_id.as_deref() == Some(restaurant_id) && period.contains(p.created_at)
            })
            .cloned()
            .collect())
    }

    async fn redemptions_claimed_in_period(
        &self,
        period: &ReportPeriod,
    ) -> Result<Vec<Redemption>> {
        self.guard()?;
        Ok(self
            .redemptions
            .iter()
            .filter(|r| period.contains(r.claimed_at))
            .cloned()
            .collect())
    }

    async fn deals_by_ids(&self, ids: &[String]) -> Result<Vec<Deal>> {
        self.guard()?;
        Ok(self
            .deals
            .iter()
            .filter(|d| ids.contains(&d.id))
            .cloned()
            .collect())
    }

    async fn active_deals(&self, restaurant_id: &str, now: DateTime<Utc>) -> Result<Vec<Deal>> {
        self.guard()?;
        Ok(self
            .deals
            .iter()
            .filter(|d| d.restaurant_id == restaurant_id && d.is_active(now))
            .cloned()
            .collect())
    }

    async fn ticket_sales_in_period(&self, period: &ReportPeriod) -> Result<Vec<TicketSale>> {
        self.guard()?;
        Ok(self
            .ticket_sales
            .iter()
            .filter(|t| period.contains(t.created_at))
            .cloned()
            .collect())
    }

    async fn restaurant_boosts(&self, restaurant_id: &str) -> Result<Vec<AdBoost>> {
        self.guard()?;
        Ok(self
            .boosts
            .iter()
            .filter(|b| b.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn boosts_in_period(
        &self,
        period: &ReportPeriod,
        restaurant_id: Option<&str>,
    ) -> Result<Vec<AdBoost>> {
        self.guard()?;
        Ok(self
            .boosts
            .iter()
            .filter(|b| {
                period.contains(b.created_at)
                    && restaurant_id.map_or(true, |id| b.restaurant_id == id)
            })
            .cloned()
            .collect())
    }

    async fn subscribed_plans(&self) -> Result<Vec<SubscribedPlan>> {
        self.guard()?;
        Ok(self.subscriptions.clone())
    }

    async fn likes_in_period(&self, period: &ReportPeriod) -> Result<Vec<ActionRecord>> {
        self.guard()?;
        Ok(self
            .likes
            .iter()
            .filter(|a| period.contains(a.created_at))
            .cloned()
            .collect())
    }

    async fn comments_in_period(&self, period: &ReportPeriod) -> Result<Vec<ActionRecord>> {
        self.guard()?;
        Ok(self
            .comments
            .iter()
            .filter(|a| period.contains(a.created_at))
            .cloned()
            .collect())
    }

    async fn stories_in_period(&self, period: &ReportPeriod) -> Result<Vec<ActionRecord>> {
        self.guard()?;
        Ok(self
            .stories
            .iter()
            .filter(|a| period.contains(a.created_at))
            .cloned()
            .collect())
    }

    async fn profiles_by_ids(&self, ids: &[String]) -> Result<Vec<UserProfile>> {
        self.guard()?;
        Ok(self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}
