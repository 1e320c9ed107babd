use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Reporting window applied when the caller omits `date_from`/`date_to`
pub const DEFAULT_PERIOD_DAYS: i64 = 30;

/// Body of `POST /reports`
///
/// `restaurant_id` is required for restaurant-scoped dashboards and acts as
/// an optional boost-spend filter on revenue reports.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
}

/// The four report types the aggregator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    AdminDashboard,
    RestaurantDashboard,
    RevenueReport,
    UserEngagement,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::AdminDashboard => write!(f, "admin_dashboard"),
            ReportKind::RestaurantDashboard => write!(f, "restaurant_dashboard"),
            ReportKind::RevenueReport => write!(f, "revenue_report"),
            ReportKind::UserEngagement => write!(f, "user_engagement"),
        }
    }
}

impl std::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "admin_dashboard" => Ok(ReportKind::AdminDashboard),
            "restaurant_dashboard" => Ok(ReportKind::RestaurantDashboard),
            "revenue_report" => Ok(ReportKind::RevenueReport),
            "user_engagement" => Ok(ReportKind::UserEngagement),
            other => Err(format!("unknown report kind: '{}'", other)),
        }
    }
}

/// Inclusive date range a report is computed over
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPeriod {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl ReportPeriod {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Resolve the requested range, defaulting to the trailing 30 days
    pub fn resolve(
        date_from: Option<&str>,
        date_to: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let from = match date_from {
            Some(raw) => parse_timestamp(raw, "date_from")?,
            None => now - Duration::days(DEFAULT_PERIOD_DAYS),
        };
        let to = match date_to {
            Some(raw) => parse_timestamp(raw, "date_to")?,
            None => now,
        };

        if from > to {
            return Err(AppError::validation(format!(
                "date_from ({}) must be before or equal to date_to ({})",
                from.to_rfc3339(),
                to.to_rfc3339()
            )));
        }

        Ok(Self { from, to })
    }

    /// Inclusive on both ends
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.from && ts <= self.to
    }
}

fn parse_timestamp(raw: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| {
            AppError::validation(format!(
                "Invalid {} timestamp: '{}'. Expected ISO-8601",
                field, raw
            ))
        })
}
