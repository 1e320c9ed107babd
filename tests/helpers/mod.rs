// Test infrastructure shared by the integration and contract suites.
//
// Reports are pure read/derive functions over the `AnalyticsStore` trait, so
// the suites run against an in-memory fixture store seeded with entity rows;
// no database is required.
#![allow(dead_code)]

pub mod fixture_store;
pub mod test_data;

pub use fixture_store::FixtureStore;
pub use test_data::*;
