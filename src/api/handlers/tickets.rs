//! Handlers for ticket endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::id_for_update;
use crate::api::dto::ticket_info::{TicketInfoRequest, TicketInfoResponse};
use crate::api::extract::{ApiPath, ValidatedJson};
use crate::application::services::CrudService;
use crate::domain::entities::NewTicketInfo;
use crate::error::{AppError, ErrorDetails};
use crate::state::AppState;

async fn init_ticket_info(
    state: &AppState,
    request: TicketInfoRequest,
) -> Result<NewTicketInfo, AppError> {
    let draft = request.into_draft()?;
    state.attraction_service.get_by_id(draft.attraction_id).await?;

    Ok(draft)
}

#[utoipa::path(
    get,
    path = "/api/tickets/all",
    responses((status = 200, description = "All tickets", body = Vec<TicketInfoResponse>)),
    tag = "tickets"
)]
#[tracing::instrument(skip(state))]
pub async fn list_tickets(
    State(state): State<AppState>,
) -> Result<Json<Vec<TicketInfoResponse>>, AppError> {
    let tickets = state.ticket_info_service.read().await?;
    Ok(Json(tickets.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/tickets/find/{id}",
    params(("id" = i64, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket", body = TicketInfoResponse),
        (status = 404, description = "Ticket not found", body = ErrorDetails)
    ),
    tag = "tickets"
)]
#[tracing::instrument(skip(state))]
pub async fn get_ticket(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<TicketInfoResponse>, AppError> {
    let ticket = state.ticket_info_service.get_by_id(id).await?;
    Ok(Json(ticket.into()))
}

/// Creates ticket details for an attraction that has none yet.
#[utoipa::path(
    post,
    path = "/api/tickets/create",
    request_body = TicketInfoRequest,
    responses(
        (status = 201, description = "Ticket created", body = TicketInfoResponse),
        (status = 400, description = "Invalid payload or attraction already has a ticket", body = ErrorDetails),
        (status = 404, description = "Attraction not found", body = ErrorDetails)
    ),
    tag = "tickets"
)]
#[tracing::instrument(skip(state))]
pub async fn create_ticket(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TicketInfoRequest>,
) -> Result<(StatusCode, Json<TicketInfoResponse>), AppError> {
    let draft = init_ticket_info(&state, payload).await?;
    let ticket = state.ticket_info_service.create(draft).await?;

    Ok((StatusCode::CREATED, Json(ticket.into())))
}

#[utoipa::path(
    put,
    path = "/api/tickets/update",
    request_body = TicketInfoRequest,
    responses(
        (status = 200, description = "Ticket updated", body = TicketInfoResponse),
        (status = 400, description = "Invalid payload or missing id", body = ErrorDetails),
        (status = 404, description = "Ticket or attraction not found", body = ErrorDetails)
    ),
    tag = "tickets"
)]
#[tracing::instrument(skip(state))]
pub async fn update_ticket(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TicketInfoRequest>,
) -> Result<Json<TicketInfoResponse>, AppError> {
    let id = id_for_update(payload.id)?;
    let draft = init_ticket_info(&state, payload).await?;
    let ticket = state.ticket_info_service.update(id, draft).await?;

    Ok(Json(ticket.into()))
}

#[utoipa::path(
    delete,
    path = "/api/tickets/delete/{id}",
    params(("id" = i64, Path, description = "Ticket id")),
    responses(
        (status = 200, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found", body = ErrorDetails)
    ),
    tag = "tickets"
)]
#[tracing::instrument(skip(state))]
pub async fn delete_ticket(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.ticket_info_service.delete(id).await?;
    Ok(StatusCode::OK)
}
