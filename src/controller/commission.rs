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
        commission::{CommissionDto, CommissionFilter, CommissionListDto},
    },
    service::commission::CommissionService,
};

pub static COMMISSION_TAG: &str = "commission";

/// List referral commissions with optional earner and status filters
#[utoipa::path(
    get,
    path = "/api/admin/commissions",
    tag = COMMISSION_TAG,
    params(CommissionFilter, PageQuery),
    responses(
        (status = 200, description = "Success when listing commissions", body = CommissionListDto),
        (status = 422, description = "Unknown status filter", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_commissions(
    State(state): State<AppState>,
    Query(filter): Query<CommissionFilter>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let commissions = CommissionService::new(&state.db)
        .list_commissions(filter, page.page_index(), page.per_page())
        .await?;

    Ok((StatusCode::OK, Json(commissions)))
}

/// Settle a pending commission
#[utoipa::path(
    post,
    path = "/api/admin/commissions/{commission_id}/settle",
    tag = COMMISSION_TAG,
    params(
        ("commission_id" = i32, Path, description = "Commission ID")
    ),
    responses(
        (status = 200, description = "Success when settling a commission", body = CommissionDto),
        (status = 404, description = "Commission not found", body = MessageDto),
        (status = 409, description = "Commission is not pending", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn settle_commission(
    State(state): State<AppState>,
    Path(commission_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let commission = CommissionService::new(&state.db).settle(commission_id).await?;

    Ok((StatusCode::OK, Json(commission)))
}

/// Void a pending commission
#[utoipa::path(
    post,
    path = "/api/admin/commissions/{commission_id}/void",
    tag = COMMISSION_TAG,
    params(
        ("commission_id" = i32, Path, description = "Commission ID")
    ),
    responses(
        (status = 200, description = "Success when voiding a commission", body = CommissionDto),
        (status = 404, description = "Commission not found", body = MessageDto),
        (status = 409, description = "Commission is not pending", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn void_commission(
    State(state): State<AppState>,
    Path(commission_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let commission = CommissionService::new(&state.db).void(commission_id).await?;

    Ok((StatusCode::OK, Json(commission)))
}
