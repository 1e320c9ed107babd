//! DineSight Analytics Service Library
//!
//! Read-only analytics aggregation for the DineSight restaurant-discovery
//! platform: one endpoint, four report builders, no writes.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::health;
pub use modules::reports;
