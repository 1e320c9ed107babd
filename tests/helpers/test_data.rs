// Entity row builders for seeding the fixture store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use dinesight::reports::models::{
    ActionRecord, AdBoost, Deal, Post, Redemption, RedemptionStatus, ReportPeriod, SubscribedPlan,
    TicketSale, UserProfile,
};

/// Parse an RFC 3339 timestamp, panicking on malformed test input
pub fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("malformed test timestamp")
}

/// Period spanning the whole of January 2026, inclusive
pub fn january() -> ReportPeriod {
    ReportPeriod::new(ts("2026-01-01T00:00:00Z"), ts("2026-01-31T23:59:59Z"))
}

pub fn user(id: &str, display_name: &str, points: i64, created_at: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        display_name: Some(display_name.to_string()),
        avatar_url: Some(format!("https://cdn.example.com/avatars/{id}.png")),
        points,
        created_at: ts(created_at),
    }
}

pub fn post(id: &str, author_id: &str, restaurant_id: Option<&str>, created_at: &str) -> Post {
    Post {
        id: id.to_string(),
        author_id: author_id.to_string(),
        restaurant_id: restaurant_id.map(str::to_string),
        deal_id: None,
        created_at: ts(created_at),
    }
}

pub fn deal(id: &str, restaurant_id: &str, expires_at: Option<&str>) -> Deal {
    Deal {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        discount_percent: Some(Decimal::from(20)),
        expires_at: expires_at.map(ts),
        max_redemptions: None,
    }
}

pub fn redemption(
    id: &str,
    deal_id: &str,
    user_id: &str,
    claimed_at: &str,
    redeemed_at: Option<&str>,
    status: RedemptionStatus,
) -> Redemption {
    Redemption {
        id: id.to_string(),
        deal_id: deal_id.to_string(),
        user_id: user_id.to_string(),
        claimed_at: ts(claimed_at),
        redeemed_at: redeemed_at.map(ts),
        status,
    }
}

pub fn ticket_sale(id: &str, total_amount: Option<Decimal>, created_at: &str) -> TicketSale {
    TicketSale {
        id: id.to_string(),
        event_id: "event-1".to_string(),
        user_id: "buyer-1".to_string(),
        quantity: 1,
        unit_price: total_amount,
        total_amount,
        created_at: ts(created_at),
    }
}

pub fn boost(
    id: &str,
    restaurant_id: &str,
    budget: Option<Decimal>,
    metrics: Option<Value>,
    created_at: &str,
) -> AdBoost {
    AdBoost {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        budget,
        status: "active".to_string(),
        metrics,
        created_at: ts(created_at),
    }
}

pub fn subscription(restaurant_id: &str, monthly_price: Option<Decimal>) -> SubscribedPlan {
    SubscribedPlan {
        restaurant_id: restaurant_id.to_string(),
        monthly_price,
    }
}

pub fn action(id: &str, user_id: &str, created_at: &str) -> ActionRecord {
    ActionRecord {
        id: id.to_string(),
        user_id: user_id.to_string(),
        created_at: ts(created_at),
    }
}
