//! Domain types shared by the API client, the dashboard and the templates.

pub mod filters;
pub mod metrics;
pub mod product;
pub mod types;
