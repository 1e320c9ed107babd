use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::reports::models::{Report, ReportKind, ReportPeriod, ReportRequest};
use crate::modules::reports::repositories::AnalyticsStore;
use crate::modules::reports::services::{
    admin_dashboard, restaurant_dashboard, revenue_report, user_engagement,
};

/// Service dispatching report requests to the matching builder
///
/// Validation happens up front: an unknown report kind or a missing
/// restaurant scope fails before any read is attempted. Each request produces
/// a fresh, independent result; nothing is cached or retried.
pub struct ReportService {
    store: Arc<dyn AnalyticsStore>,
}

impl ReportService {
    /// Create a new report service over the shared read-only store
    pub fn new(store: Arc<dyn AnalyticsStore>) -> Self {
        Self { store }
    }

    /// Validate the request and produce the requested report
    pub async fn generate(&self, request: ReportRequest) -> Result<Report> {
        let kind: ReportKind = request.kind.parse().map_err(AppError::validation)?;

        let now = Utc::now();
        let period =
            ReportPeriod::resolve(request.date_from.as_deref(), request.date_to.as_deref(), now)?;

        info!(
            kind = %kind,
            from = %period.from.to_rfc3339(),
            to = %period.to.to_rfc3339(),
            "Generating report"
        );

        let store = self.store.as_ref();
        let report = match kind {
            ReportKind::AdminDashboard => {
                Report::Admin(admin_dashboard::build(store, &period).await?)
            }
            ReportKind::RestaurantDashboard => {
                let restaurant_id = request.restaurant_id.as_deref().ok_or_else(|| {
                    AppError::validation(
                        "restaurant_id is required for restaurant_dashboard reports",
                    )
                })?;
                Report::Restaurant(
                    restaurant_dashboard::build(store, restaurant_id, &period, now).await?,
                )
            }
            ReportKind::RevenueReport => Report::Revenue(
                revenue_report::build(store, request.restaurant_id.as_deref(), &period).await?,
            ),
            ReportKind::UserEngagement => {
                Report::Engagement(user_engagement::build(store, &period).await?)
            }
        };

        info!(kind = %kind, "Report generated");

        Ok(report)
    }
}
