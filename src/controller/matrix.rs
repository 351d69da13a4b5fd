use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::MessageDto,
        app::AppState,
        matrix::{NetworkNodeDto, PlaceMemberDto, PositionDto, TreeQuery},
    },
    service::matrix::MatrixService,
};

pub static MATRIX_TAG: &str = "matrix";

/// Get the downline tree below a member's matrix position
#[utoipa::path(
    get,
    path = "/api/admin/matrix/tree/{member_id}",
    tag = MATRIX_TAG,
    params(
        ("member_id" = i32, Path, description = "Member ID"),
        TreeQuery
    ),
    responses(
        (status = 200, description = "Success when retrieving the downline tree", body = NetworkNodeDto),
        (status = 404, description = "Member has no matrix position", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_tree(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
    Query(query): Query<TreeQuery>,
) -> Result<impl IntoResponse, Error> {
    let tree = MatrixService::new(&state.db)
        .get_tree(member_id, query.depth)
        .await?;

    Ok((StatusCode::OK, Json(tree)))
}

/// Get a member's matrix position
#[utoipa::path(
    get,
    path = "/api/admin/matrix/position/{member_id}",
    tag = MATRIX_TAG,
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving a matrix position", body = PositionDto),
        (status = 404, description = "Member has no matrix position", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_position(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let position = MatrixService::new(&state.db).get_position(member_id).await?;

    Ok((StatusCode::OK, Json(position)))
}

/// Place a member into the matrix under their sponsor
#[utoipa::path(
    post,
    path = "/api/admin/matrix/place",
    tag = MATRIX_TAG,
    request_body = PlaceMemberDto,
    responses(
        (status = 201, description = "Success when placing a member", body = PositionDto),
        (status = 404, description = "Member or sponsor not found", body = MessageDto),
        (status = 409, description = "Member already placed or matrix full", body = MessageDto),
        (status = 422, description = "Sponsor has no matrix position", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn place_member(
    State(state): State<AppState>,
    Json(placement): Json<PlaceMemberDto>,
) -> Result<impl IntoResponse, Error> {
    let position = MatrixService::new(&state.db).place(placement).await?;

    Ok((StatusCode::CREATED, Json(position)))
}
