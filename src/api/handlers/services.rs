//! Handlers for service endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::id_for_update;
use crate::api::dto::service::{ServiceRequest, ServiceResponse};
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::application::services::{CrudService, fetch_by_ids};
use crate::domain::entities::NewService;
use crate::error::{AppError, ErrorDetails};
use crate::state::AppState;

async fn init_service(state: &AppState, request: ServiceRequest) -> Result<NewService, AppError> {
    let draft = request.into_draft()?;
    fetch_by_ids(
        &draft.attraction_ids,
        state.attraction_service.as_ref(),
        "Attraction",
    )
    .await?;

    Ok(draft)
}

#[utoipa::path(
    get,
    path = "/api/services/all",
    responses((status = 200, description = "All services", body = Vec<ServiceResponse>)),
    tag = "services"
)]
#[tracing::instrument(skip(state))]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let services = state.service_service.read().await?;
    Ok(Json(services.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/services/find/{id}",
    params(("id" = i64, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service", body = ServiceResponse),
        (status = 404, description = "Service not found", body = ErrorDetails)
    ),
    tag = "services"
)]
#[tracing::instrument(skip(state))]
pub async fn get_service(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<ServiceResponse>, AppError> {
    let service = state.service_service.get_by_id(id).await?;
    Ok(Json(service.into()))
}

#[utoipa::path(
    post,
    path = "/api/services/create",
    request_body = ServiceRequest,
    responses(
        (status = 201, description = "Service created", body = ServiceResponse),
        (status = 400, description = "Invalid payload or unknown type", body = ErrorDetails),
        (status = 404, description = "Listed attraction not found", body = ErrorDetails)
    ),
    tag = "services"
)]
#[tracing::instrument(skip(state))]
pub async fn create_service(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ServiceRequest>,
) -> Result<(StatusCode, Json<ServiceResponse>), AppError> {
    let draft = init_service(&state, payload).await?;
    let service = state.service_service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(service.into())))
}

/// Replaces a service and its attraction links.
#[utoipa::path(
    put,
    path = "/api/services/update",
    request_body = ServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = ServiceResponse),
        (status = 400, description = "Invalid payload or missing id", body = ErrorDetails),
        (status = 404, description = "Service or listed attraction not found", body = ErrorDetails)
    ),
    tag = "services"
)]
#[tracing::instrument(skip(state))]
pub async fn update_service(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ServiceRequest>,
) -> Result<Json<ServiceResponse>, AppError> {
    let id = id_for_update(payload.id)?;
    let draft = init_service(&state, payload).await?;
    let service = state.service_service.update(id, draft).await?;

    Ok(Json(service.into()))
}

#[utoipa::path(
    delete,
    path = "/api/services/delete/{id}",
    params(("id" = i64, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 404, description = "Service not found", body = ErrorDetails)
    ),
    tag = "services"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_service(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.service_service.delete(id).await?;
    Ok(StatusCode::OK)
}
