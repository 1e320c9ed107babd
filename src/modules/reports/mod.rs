pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Report, ReportKind, ReportPeriod, ReportRequest};
pub use repositories::{AnalyticsStore, MySqlAnalyticsStore};
pub use services::ReportService;
