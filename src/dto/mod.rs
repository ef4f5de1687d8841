//! DTO modules that bridge the dashboard with templates.

pub mod main;
pub mod metrics;
pub mod products;
