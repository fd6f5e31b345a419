//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the CRUD contract
//! ([`services::CrudService`]) to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::AddressService`] - Addresses
//! - [`services::AttractionService`] - Attractions and attraction search
//! - [`services::ServiceService`] - Services offered at attractions
//! - [`services::TicketInfoService`] - Ticket details
//!
//! [`services::fetch_by_ids`] resolves lists of related ids through any of them.

pub mod services;
