pub mod admin_dashboard;
pub mod report_service;
pub mod restaurant_dashboard;
pub mod revenue_report;
pub mod time_series;
pub mod user_engagement;

pub use report_service::ReportService;
