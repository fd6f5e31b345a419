//! Core domain entities representing the tourism data model.
//!
//! Entities are plain data structures mirroring table rows. Relations are
//! carried as identifiers; the API layer decides how much of a related record
//! to expose.
//!
//! # Entity Types
//!
//! - [`Address`] - Where attractions are located
//! - [`Attraction`] - A tourist attraction
//! - [`Service`] - A service offered at one or more attractions
//! - [`TicketInfo`] - Admission ticket details of a single attraction
//!
//! # Design Pattern
//!
//! Each entity has a `New*` counterpart holding the writable fields. The same
//! draft is used for creation and for full replacement on update.

pub mod address;
pub mod attraction;
pub mod service;
pub mod ticket_info;

pub use address::{Address, NewAddress};
pub use attraction::{Attraction, NewAttraction};
pub use service::{NewService, Service};
pub use ticket_info::{NewTicketInfo, TicketInfo};
