//! Domain layer containing the tourism entities and data access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`types`] - Attraction and service classifications
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - CRUD orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod types;
