//! OpenAPI document for the REST API.

use utoipa::OpenApi;

use crate::api::dto::{address, attraction, health, service, ticket_info};
use crate::api::handlers::{addresses, attractions, health as health_handlers, services, tickets};
use crate::domain::types::{AttractionType, ServiceType};
use crate::error::ErrorDetails;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tourism Catalog API",
        description = "Attractions, their addresses, services and tickets"
    ),
    paths(
        // Addresses
        addresses::list_addresses,
        addresses::get_address,
        addresses::create_address,
        addresses::update_address,
        addresses::delete_address,
        // Attractions
        attractions::list_attractions,
        attractions::get_attraction,
        attractions::find_attractions_by_name,
        attractions::search_attractions_by_city,
        attractions::search_attractions_by_region,
        attractions::search_attractions_by_service_type,
        attractions::create_attraction,
        attractions::update_attraction,
        attractions::delete_attraction,
        // Services
        services::list_services,
        services::get_service,
        services::create_service,
        services::update_service,
        services::delete_service,
        // Tickets
        tickets::list_tickets,
        tickets::get_ticket,
        tickets::create_ticket,
        tickets::update_ticket,
        tickets::delete_ticket,
        // Health
        health_handlers::health_handler,
    ),
    components(schemas(
        address::AddressRequest,
        address::AddressResponse,
        attraction::AttractionRequest,
        attraction::AttractionResponse,
        service::ServiceRequest,
        service::ServiceResponse,
        ticket_info::TicketInfoRequest,
        ticket_info::TicketInfoResponse,
        health::HealthResponse,
        health::HealthChecks,
        health::CheckStatus,
        AttractionType,
        ServiceType,
        ErrorDetails,
    )),
    tags(
        (name = "addresses", description = "Addresses of attractions"),
        (name = "attractions", description = "Attractions and attraction search"),
        (name = "services", description = "Services offered at attractions"),
        (name = "tickets", description = "Ticket details"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
