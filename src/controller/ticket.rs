use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{MessageDto, PageQuery},
        app::AppState,
        ticket::{TicketDto, TicketFilter, TicketListDto, UpdateTicketDto},
    },
    service::ticket::TicketService,
};

pub static TICKET_TAG: &str = "ticket";

/// List support tickets with an optional status filter
#[utoipa::path(
    get,
    path = "/api/admin/tickets",
    tag = TICKET_TAG,
    params(TicketFilter, PageQuery),
    responses(
        (status = 200, description = "Success when listing tickets", body = TicketListDto),
        (status = 422, description = "Unknown status filter", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    Query(filter): Query<TicketFilter>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let tickets = TicketService::new(&state.db)
        .list_tickets(filter, page.page_index(), page.per_page())
        .await?;

    Ok((StatusCode::OK, Json(tickets)))
}

/// Get a support ticket
#[utoipa::path(
    get,
    path = "/api/admin/tickets/{ticket_id}",
    tag = TICKET_TAG,
    params(
        ("ticket_id" = i32, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving a ticket", body = TicketDto),
        (status = 404, description = "Ticket not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let ticket = TicketService::new(&state.db).get_ticket(ticket_id).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Update a ticket's status or priority
#[utoipa::path(
    patch,
    path = "/api/admin/tickets/{ticket_id}",
    tag = TICKET_TAG,
    params(
        ("ticket_id" = i32, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Success when updating a ticket", body = TicketDto),
        (status = 404, description = "Ticket not found", body = MessageDto),
        (status = 422, description = "Nothing to update or unknown value", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<i32>,
    Json(update): Json<UpdateTicketDto>,
) -> Result<impl IntoResponse, Error> {
    let ticket = TicketService::new(&state.db)
        .update_ticket(ticket_id, update)
        .await?;

    Ok((StatusCode::OK, Json(ticket)))
}
