use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::MessageDto,
        app::AppState,
        venture::{CreateVentureDto, UpdateVentureStatusDto, VentureDto},
    },
    service::venture::VentureService,
};

pub static VENTURE_TAG: &str = "venture";

/// List community ventures
#[utoipa::path(
    get,
    path = "/api/admin/ventures",
    tag = VENTURE_TAG,
    responses(
        (status = 200, description = "Success when listing ventures", body = Vec<VentureDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_ventures(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let ventures = VentureService::new(&state.db).list_ventures().await?;

    Ok((StatusCode::OK, Json(ventures)))
}

/// Create a community venture
#[utoipa::path(
    post,
    path = "/api/admin/ventures",
    tag = VENTURE_TAG,
    request_body = CreateVentureDto,
    responses(
        (status = 201, description = "Success when creating a venture", body = VentureDto),
        (status = 422, description = "Invalid venture details", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_venture(
    State(state): State<AppState>,
    Json(new_venture): Json<CreateVentureDto>,
) -> Result<impl IntoResponse, Error> {
    let venture = VentureService::new(&state.db).create_venture(new_venture).await?;

    Ok((StatusCode::CREATED, Json(venture)))
}

/// Update a venture's status
#[utoipa::path(
    patch,
    path = "/api/admin/ventures/{venture_id}/status",
    tag = VENTURE_TAG,
    params(
        ("venture_id" = i32, Path, description = "Venture ID")
    ),
    request_body = UpdateVentureStatusDto,
    responses(
        (status = 200, description = "Success when updating venture status", body = VentureDto),
        (status = 404, description = "Venture not found", body = MessageDto),
        (status = 422, description = "Unknown status value", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_venture_status(
    State(state): State<AppState>,
    Path(venture_id): Path<i32>,
    Json(update): Json<UpdateVentureStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let venture = VentureService::new(&state.db)
        .update_status(venture_id, update)
        .await?;

    Ok((StatusCode::OK, Json(venture)))
}
