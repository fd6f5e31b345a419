//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AddressService, AttractionService, ServiceService, TicketInfoService,
};
use crate::infrastructure::persistence::{
    PgAddressRepository, PgAttractionRepository, PgServiceRepository, PgTicketInfoRepository,
};

pub type PgAddressService = AddressService<PgAddressRepository>;
pub type PgAttractionService = AttractionService<PgAttractionRepository>;
pub type PgServiceService = ServiceService<PgServiceRepository>;
pub type PgTicketInfoService = TicketInfoService<PgTicketInfoRepository>;

#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub address_service: Arc<PgAddressService>,
    pub attraction_service: Arc<PgAttractionService>,
    pub service_service: Arc<PgServiceService>,
    pub ticket_info_service: Arc<PgTicketInfoService>,
}

impl AppState {
    /// Wires the PostgreSQL repositories and services around one pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let address_repository = Arc::new(PgAddressRepository::new(pool.clone()));
        let attraction_repository = Arc::new(PgAttractionRepository::new(pool.clone()));
        let service_repository = Arc::new(PgServiceRepository::new(pool.clone()));
        let ticket_info_repository = Arc::new(PgTicketInfoRepository::new(pool.clone()));

        Self {
            address_service: Arc::new(AddressService::new(address_repository)),
            attraction_service: Arc::new(AttractionService::new(attraction_repository)),
            service_service: Arc::new(ServiceService::new(service_repository)),
            ticket_info_service: Arc::new(TicketInfoService::new(ticket_info_repository)),
            pool,
        }
    }
}
