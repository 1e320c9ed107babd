// Read-only projections of the consumer platform's tables.
//
// The analytics service never writes any of these; each struct carries only
// the columns the report builders consume. Ids are CHAR(36) UUID strings,
// matching what the product writes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Consumer account profile, used for new-user counts and creator lookups
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub points: i64,
    pub created_at: DateTime<Utc>,
}

/// A post on the social feed, optionally tagging a restaurant and a deal
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub restaurant_id: Option<String>,
    pub deal_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A restaurant's discount offer
///
/// `expires_at = NULL` means the deal never expires; `max_redemptions = NULL`
/// means unlimited claims.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Deal {
    pub id: String,
    pub restaurant_id: String,
    pub discount_percent: Option<Decimal>,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_redemptions: Option<i64>,
}

/// Lifecycle of a user's claim against a deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "lowercase")]
pub enum RedemptionStatus {
    /// Claimed but not yet used at the restaurant
    #[serde(rename = "claimed")]
    Claimed,

    /// Verified at the restaurant
    #[serde(rename = "redeemed")]
    Redeemed,

    /// Claim withdrawn or voided
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl std::fmt::Display for RedemptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedemptionStatus::Claimed => write!(f, "claimed"),
            RedemptionStatus::Redeemed => write!(f, "redeemed"),
            RedemptionStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A user's claim against a deal
///
/// A redemption belongs to exactly one deal and a deal to exactly one
/// restaurant; that chain is how restaurant-scoped redemption metrics are
/// derived.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Redemption {
    pub id: String,
    pub deal_id: String,
    pub user_id: String,
    pub claimed_at: DateTime<Utc>,
    pub redeemed_at: Option<DateTime<Utc>>,
    pub status: RedemptionStatus,
}

/// A ticket purchase for a platform event
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketSale {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub quantity: i64,
    pub unit_price: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// A paid promotion of a restaurant's content
///
/// `metrics` is a free-form JSON blob written by the ad delivery pipeline;
/// impressions and clicks are read out of it defensively.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdBoost {
    pub id: String,
    pub restaurant_id: String,
    pub budget: Option<Decimal>,
    pub status: String,
    pub metrics: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// A restaurant currently holding a subscription plan, joined to the plan's
/// monthly price. Recurring-revenue snapshot rows are not date-filtered.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubscribedPlan {
    pub restaurant_id: String,
    pub monthly_price: Option<Decimal>,
}

/// Minimal projection of a like, comment, or story row
///
/// Engagement reporting only needs who acted and when.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActionRecord {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Deal {
    /// A deal is active when it has no expiry or expires at/after `now`
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            None => true,
            Some(expiry) => expiry >= now,
        }
    }
}
