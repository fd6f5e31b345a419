//! API route configuration.

use crate::api::handlers::{addresses, attractions, services, tickets};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// `/api/addresses/*`
fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(addresses::list_addresses))
        .route("/find/{id}", get(addresses::get_address))
        .route("/create", post(addresses::create_address))
        .route("/update", put(addresses::update_address))
        .route("/delete/{id}", delete(addresses::delete_address))
}

/// `/api/attractions/*`, including the search endpoints.
fn attraction_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(attractions::list_attractions))
        .route("/find", get(attractions::find_attractions_by_name))
        .route("/find/{id}", get(attractions::get_attraction))
        .route(
            "/search-by-city/{city}",
            get(attractions::search_attractions_by_city),
        )
        .route(
            "/search-by-region/{region}",
            get(attractions::search_attractions_by_region),
        )
        .route(
            "/search-by-service-type/{type}",
            get(attractions::search_attractions_by_service_type),
        )
        .route("/create", post(attractions::create_attraction))
        .route("/update", put(attractions::update_attraction))
        .route("/delete/{id}", delete(attractions::delete_attraction))
}

/// `/api/services/*`
fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(services::list_services))
        .route("/find/{id}", get(services::get_service))
        .route("/create", post(services::create_service))
        .route("/update", put(services::update_service))
        .route("/delete/{id}", delete(services::delete_service))
}

/// `/api/tickets/*`
fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(tickets::list_tickets))
        .route("/find/{id}", get(tickets::get_ticket))
        .route("/create", post(tickets::create_ticket))
        .route("/update", put(tickets::update_ticket))
        .route("/delete/{id}", delete(tickets::delete_ticket))
}

/// All resource routes, to be nested under `/api`.
///
/// # Endpoints (per resource)
///
/// - `GET    /{res}/all`         - List records
/// - `GET    /{res}/find/{id}`   - Fetch one record
/// - `POST   /{res}/create`      - Create a record (201)
/// - `PUT    /{res}/update`      - Replace a record; the body carries the id
/// - `DELETE /{res}/delete/{id}` - Delete a record
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/addresses", address_routes())
        .nest("/attractions", attraction_routes())
        .nest("/services", service_routes())
        .nest("/tickets", ticket_routes())
}
