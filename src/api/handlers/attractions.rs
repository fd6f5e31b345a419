//! Handlers for attraction endpoints, including search.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::attraction::{AttractionRequest, AttractionResponse, NameQuery};
use crate::api::dto::id_for_update;
use crate::api::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::application::services::{CrudService, fetch_by_ids};
use crate::domain::entities::{Attraction, NewAttraction};
use crate::error::{AppError, ErrorDetails};
use crate::state::AppState;

/// Checks that the address, the ticket and the services of a request exist.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] for a missing address or ticket, or listing
/// every missing service id.
/// Returns [`AppError::IllegalArgument`] for an unknown attraction type.
async fn init_attraction(
    state: &AppState,
    request: AttractionRequest,
) -> Result<NewAttraction, AppError> {
    let draft = request.into_draft()?;

    state.address_service.get_by_id(draft.address_id).await?;

    if let Some(ticket_info_id) = draft.ticket_info_id {
        state.ticket_info_service.get_by_id(ticket_info_id).await?;
    }

    fetch_by_ids(&draft.service_ids, state.service_service.as_ref(), "Service").await?;

    Ok(draft)
}

fn to_responses(attractions: Vec<Attraction>) -> Json<Vec<AttractionResponse>> {
    Json(attractions.into_iter().map(Into::into).collect())
}

#[utoipa::path(
    get,
    path = "/api/attractions/all",
    responses((status = 200, description = "All attractions", body = Vec<AttractionResponse>)),
    tag = "attractions"
)]
#[tracing::instrument(skip(state))]
pub async fn list_attractions(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttractionResponse>>, AppError> {
    Ok(to_responses(state.attraction_service.read().await?))
}

#[utoipa::path(
    get,
    path = "/api/attractions/find/{id}",
    params(("id" = i64, Path, description = "Attraction id")),
    responses(
        (status = 200, description = "Attraction", body = AttractionResponse),
        (status = 404, description = "Attraction not found", body = ErrorDetails)
    ),
    tag = "attractions"
)]
#[tracing::instrument(skip(state))]
pub async fn get_attraction(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<AttractionResponse>, AppError> {
    let attraction = state.attraction_service.get_by_id(id).await?;
    Ok(Json(attraction.into()))
}

/// Attractions whose name contains the fragment, ignoring case.
#[utoipa::path(
    get,
    path = "/api/attractions/find",
    params(NameQuery),
    responses((status = 200, description = "Matching attractions", body = Vec<AttractionResponse>)),
    tag = "attractions"
)]
#[tracing::instrument(skip(state))]
pub async fn find_attractions_by_name(
    ApiQuery(query): ApiQuery<NameQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AttractionResponse>>, AppError> {
    Ok(to_responses(
        state
            .attraction_service
            .find_by_name_containing(&query.name)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/attractions/search-by-city/{city}",
    params(("city" = String, Path, description = "Exact city name")),
    responses((status = 200, description = "Attractions in the city", body = Vec<AttractionResponse>)),
    tag = "attractions"
)]
#[tracing::instrument(skip(state))]
pub async fn search_attractions_by_city(
    ApiPath(city): ApiPath<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AttractionResponse>>, AppError> {
    Ok(to_responses(
        state.attraction_service.search_by_city(&city).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/attractions/search-by-region/{region}",
    params(("region" = String, Path, description = "Exact region name")),
    responses((status = 200, description = "Attractions in the region", body = Vec<AttractionResponse>)),
    tag = "attractions"
)]
#[tracing::instrument(skip(state))]
pub async fn search_attractions_by_region(
    ApiPath(region): ApiPath<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AttractionResponse>>, AppError> {
    Ok(to_responses(
        state.attraction_service.search_by_region(&region).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/attractions/search-by-service-type/{type}",
    params(("type" = String, Path, description = "Service type display name, e.g. `Гид`")),
    responses(
        (status = 200, description = "Attractions offering the service type", body = Vec<AttractionResponse>),
        (status = 400, description = "Unknown service type", body = ErrorDetails)
    ),
    tag = "attractions"
)]
#[tracing::instrument(skip(state))]
pub async fn search_attractions_by_service_type(
    ApiPath(service_type): ApiPath<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AttractionResponse>>, AppError> {
    Ok(to_responses(
        state
            .attraction_service
            .search_by_service_type(&service_type)
            .await?,
    ))
}

/// Creates an attraction, links its services and claims its ticket.
#[utoipa::path(
    post,
    path = "/api/attractions/create",
    request_body = AttractionRequest,
    responses(
        (status = 201, description = "Attraction created", body = AttractionResponse),
        (status = 400, description = "Invalid payload or unknown type", body = ErrorDetails),
        (status = 404, description = "Address, ticket or service not found", body = ErrorDetails)
    ),
    tag = "attractions"
)]
#[tracing::instrument(skip(state))]
pub async fn create_attraction(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AttractionRequest>,
) -> Result<(StatusCode, Json<AttractionResponse>), AppError> {
    let draft = init_attraction(&state, payload).await?;
    let attraction = state.attraction_service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(attraction.into())))
}

/// Replaces an attraction. Omitting `servicesID` removes all service links;
/// omitting `ticketInfoID` keeps the current ticket.
#[utoipa::path(
    put,
    path = "/api/attractions/update",
    request_body = AttractionRequest,
    responses(
        (status = 200, description = "Attraction updated", body = AttractionResponse),
        (status = 400, description = "Invalid payload or missing id", body = ErrorDetails),
        (status = 404, description = "Attraction or a related record not found", body = ErrorDetails)
    ),
    tag = "attractions"
)]
#[tracing::instrument(skip(state))]
pub async fn update_attraction(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AttractionRequest>,
) -> Result<Json<AttractionResponse>, AppError> {
    let id = id_for_update(payload.id)?;
    let draft = init_attraction(&state, payload).await?;
    let attraction = state.attraction_service.update(id, draft).await?;

    Ok(Json(attraction.into()))
}

#[utoipa::path(
    delete,
    path = "/api/attractions/delete/{id}",
    params(("id" = i64, Path, description = "Attraction id")),
    responses(
        (status = 200, description = "Attraction deleted"),
        (status = 404, description = "Attraction not found", body = ErrorDetails)
    ),
    tag = "attractions"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_attraction(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.attraction_service.delete(id).await?;
    Ok(StatusCode::OK)
}
