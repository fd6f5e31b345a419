//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by `crate::infrastructure::persistence`. Mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`AddressRepository`] - Addresses and the attractions located there
//! - [`AttractionRepository`] - Attractions, their services and search queries
//! - [`ServiceRepository`] - Services and the attractions offering them
//! - [`TicketInfoRepository`] - Ticket details
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod address_repository;
pub mod attraction_repository;
pub mod service_repository;
pub mod ticket_info_repository;

pub use address_repository::AddressRepository;
pub use attraction_repository::AttractionRepository;
pub use service_repository::ServiceRepository;
pub use ticket_info_repository::TicketInfoRepository;

#[cfg(test)]
pub use address_repository::MockAddressRepository;
#[cfg(test)]
pub use attraction_repository::MockAttractionRepository;
#[cfg(test)]
pub use service_repository::MockServiceRepository;
#[cfg(test)]
pub use ticket_info_repository::MockTicketInfoRepository;
