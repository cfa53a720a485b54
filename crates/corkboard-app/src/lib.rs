//! Corkboard events server: HTTP wiring over the service layer.

pub mod app;
pub mod config;
pub mod error;
pub mod notifier_handler;
pub mod store_handler;
