//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs. Multi-statement writes run in a
//! single transaction.
//!
//! # Repositories
//!
//! - [`PgAddressRepository`] - Addresses
//! - [`PgAttractionRepository`] - Attractions, service links and search
//! - [`PgServiceRepository`] - Services
//! - [`PgTicketInfoRepository`] - Ticket details

pub mod pg_address_repository;
pub mod pg_attraction_repository;
pub mod pg_service_repository;
pub mod pg_ticket_info_repository;

pub use pg_address_repository::PgAddressRepository;
pub use pg_attraction_repository::PgAttractionRepository;
pub use pg_service_repository::PgServiceRepository;
pub use pg_ticket_info_repository::PgTicketInfoRepository;
