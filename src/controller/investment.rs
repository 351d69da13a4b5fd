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
        investment::{
            BulkRejectDto, BulkRejectResultDto, InvestmentDto, InvestmentFilter,
            InvestmentListDto, RejectDto,
        },
    },
    service::investment::InvestmentService,
};

pub static INVESTMENT_TAG: &str = "investment";

/// List investments with an optional status filter
#[utoipa::path(
    get,
    path = "/api/admin/investments",
    tag = INVESTMENT_TAG,
    params(InvestmentFilter, PageQuery),
    responses(
        (status = 200, description = "Success when listing investments", body = InvestmentListDto),
        (status = 422, description = "Unknown status filter", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_investments(
    State(state): State<AppState>,
    Query(filter): Query<InvestmentFilter>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let investments = InvestmentService::new(&state.db)
        .list_investments(filter, page.page_index(), page.per_page())
        .await?;

    Ok((StatusCode::OK, Json(investments)))
}

/// Approve a pending investment
#[utoipa::path(
    post,
    path = "/api/admin/investments/{investment_id}/approve",
    tag = INVESTMENT_TAG,
    params(
        ("investment_id" = i32, Path, description = "Investment ID")
    ),
    responses(
        (status = 200, description = "Success when approving an investment", body = InvestmentDto),
        (status = 404, description = "Investment not found", body = MessageDto),
        (status = 409, description = "Investment is not pending", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn approve_investment(
    State(state): State<AppState>,
    Path(investment_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let investment = InvestmentService::new(&state.db).approve(investment_id).await?;

    Ok((StatusCode::OK, Json(investment)))
}

/// Reject a pending investment with a reason
#[utoipa::path(
    post,
    path = "/api/admin/investments/{investment_id}/reject",
    tag = INVESTMENT_TAG,
    params(
        ("investment_id" = i32, Path, description = "Investment ID")
    ),
    request_body = RejectDto,
    responses(
        (status = 200, description = "Success when rejecting an investment", body = InvestmentDto),
        (status = 404, description = "Investment not found", body = MessageDto),
        (status = 409, description = "Investment is not pending", body = MessageDto),
        (status = 422, description = "Missing rejection reason", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn reject_investment(
    State(state): State<AppState>,
    Path(investment_id): Path<i32>,
    Json(rejection): Json<RejectDto>,
) -> Result<impl IntoResponse, Error> {
    let investment = InvestmentService::new(&state.db)
        .reject(investment_id, rejection)
        .await?;

    Ok((StatusCode::OK, Json(investment)))
}

/// Reject every still-pending investment in a list of ids
#[utoipa::path(
    post,
    path = "/api/admin/investments/bulk-reject",
    tag = INVESTMENT_TAG,
    request_body = BulkRejectDto,
    responses(
        (status = 200, description = "Success when bulk rejecting investments", body = BulkRejectResultDto),
        (status = 422, description = "Missing ids or rejection reason", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn bulk_reject_investments(
    State(state): State<AppState>,
    Json(request): Json<BulkRejectDto>,
) -> Result<impl IntoResponse, Error> {
    let result = InvestmentService::new(&state.db).bulk_reject(request).await?;

    Ok((StatusCode::OK, Json(result)))
}
