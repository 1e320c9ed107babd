pub mod mysql_store;
pub mod store;

pub use mysql_store::MySqlAnalyticsStore;
pub use store::AnalyticsStore;
