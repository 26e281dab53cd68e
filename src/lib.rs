pub mod aggregation;
pub mod alert_registry;
pub mod api;
pub mod campus;
pub mod clock;
pub mod config;
pub mod cost;
pub mod energy;
pub mod error;
pub mod models;
pub mod reading_store;
pub mod recommendation_catalog;
pub mod scenario;
pub mod seed;
pub mod state;
