//! Business logic services for the application layer.

pub mod address_service;
pub mod attraction_service;
pub mod crud_service;
pub mod lookup;
pub mod service_service;
pub mod ticket_info_service;

pub use address_service::AddressService;
pub use attraction_service::AttractionService;
pub use crud_service::CrudService;
pub use lookup::fetch_by_ids;
pub use service_service::ServiceService;
pub use ticket_info_service::TicketInfoService;
