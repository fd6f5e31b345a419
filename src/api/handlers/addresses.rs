//! Handlers for address endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::address::{AddressRequest, AddressResponse};
use crate::api::dto::id_for_update;
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::application::services::{CrudService, fetch_by_ids};
use crate::domain::entities::NewAddress;
use crate::error::{AppError, ErrorDetails};
use crate::state::AppState;

/// Resolves the attractions an address request points at.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] listing every attraction id that does not exist.
async fn init_address(state: &AppState, request: AddressRequest) -> Result<NewAddress, AppError> {
    if let Some(ids) = &request.attraction_ids {
        fetch_by_ids(ids, state.attraction_service.as_ref(), "Attraction").await?;
    }

    request.into_draft()
}

#[utoipa::path(
    get,
    path = "/api/addresses/all",
    responses((status = 200, description = "All addresses", body = Vec<AddressResponse>)),
    tag = "addresses"
)]
#[tracing::instrument(skip(state))]
pub async fn list_addresses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AddressResponse>>, AppError> {
    let addresses = state.address_service.read().await?;
    Ok(Json(addresses.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/addresses/find/{id}",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address", body = AddressResponse),
        (status = 404, description = "Address not found", body = ErrorDetails)
    ),
    tag = "addresses"
)]
#[tracing::instrument(skip(state))]
pub async fn get_address(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<AddressResponse>, AppError> {
    let address = state.address_service.get_by_id(id).await?;
    Ok(Json(address.into()))
}

/// Creates an address and moves the listed attractions to it.
#[utoipa::path(
    post,
    path = "/api/addresses/create",
    request_body = AddressRequest,
    responses(
        (status = 201, description = "Address created", body = AddressResponse),
        (status = 400, description = "Invalid payload", body = ErrorDetails),
        (status = 404, description = "Listed attraction not found", body = ErrorDetails)
    ),
    tag = "addresses"
)]
#[tracing::instrument(skip(state))]
pub async fn create_address(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddressRequest>,
) -> Result<(StatusCode, Json<AddressResponse>), AppError> {
    let draft = init_address(&state, payload).await?;
    let address = state.address_service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(address.into())))
}

#[utoipa::path(
    put,
    path = "/api/addresses/update",
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address updated", body = AddressResponse),
        (status = 400, description = "Invalid payload or missing id", body = ErrorDetails),
        (status = 404, description = "Address or listed attraction not found", body = ErrorDetails)
    ),
    tag = "addresses"
)]
#[tracing::instrument(skip(state))]
pub async fn update_address(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddressRequest>,
) -> Result<Json<AddressResponse>, AppError> {
    let id = id_for_update(payload.id)?;
    let draft = init_address(&state, payload).await?;
    let address = state.address_service.update(id, draft).await?;

    Ok(Json(address.into()))
}

/// Deletes an address together with its attractions.
#[utoipa::path(
    delete,
    path = "/api/addresses/delete/{id}",
    params(("id" = i64, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address deleted"),
        (status = 404, description = "Address not found", body = ErrorDetails)
    ),
    tag = "addresses"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_address(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.address_service.delete(id).await?;
    Ok(StatusCode::OK)
}
