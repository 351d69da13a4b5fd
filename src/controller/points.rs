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
        points::{AdjustPointsDto, PointBalancesDto, PointEntryDto},
    },
    service::points::PointsService,
};

pub static POINTS_TAG: &str = "points";

/// Get a member's point balances and recent ledger entries
#[utoipa::path(
    get,
    path = "/api/admin/points/{member_id}",
    tag = POINTS_TAG,
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving point balances", body = PointBalancesDto),
        (status = 404, description = "Member not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_point_balances(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let balances = PointsService::new(&state.db).balances(member_id).await?;

    Ok((StatusCode::OK, Json(balances)))
}

/// Apply a manual point adjustment
#[utoipa::path(
    post,
    path = "/api/admin/points/adjust",
    tag = POINTS_TAG,
    request_body = AdjustPointsDto,
    responses(
        (status = 201, description = "Success when adjusting points", body = PointEntryDto),
        (status = 404, description = "Member not found", body = MessageDto),
        (status = 422, description = "Invalid adjustment", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn adjust_points(
    State(state): State<AppState>,
    Json(adjustment): Json<AdjustPointsDto>,
) -> Result<impl IntoResponse, Error> {
    let entry = PointsService::new(&state.db).adjust(adjustment).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}
