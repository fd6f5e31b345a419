//! HTTP request handlers for API endpoints.
//!
//! One module per resource under `/api`, plus the health check.

pub mod addresses;
pub mod attractions;
pub mod health;
pub mod services;
pub mod tickets;

pub use health::health_handler;
