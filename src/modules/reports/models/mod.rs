pub mod entities;
pub mod request;
pub mod response;

pub use entities::{
    ActionRecord, AdBoost, Deal, Post, Redemption, RedemptionStatus, SubscribedPlan, TicketSale,
    UserProfile,
};
pub use request::{ReportKind, ReportPeriod, ReportRequest, DEFAULT_PERIOD_DAYS};
pub use response::{
    AdminCharts, AdminDashboardReport, AdminOverview, BoostBreakdown, DailyAmounts, DailyCounts,
    EngagementCharts, EngagementOverview, Report, RestaurantCharts, RestaurantDashboardReport,
    RestaurantOverview, RevenueBreakdown, RevenueCharts, RevenueReport, RevenueSummary,
    SubscriptionBreakdown, TicketBreakdown, TopCreator, UserEngagementReport,
};
