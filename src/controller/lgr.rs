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
        lgr::{GrantLgrDto, LgrAwardDto, LgrFilter, LgrListDto},
    },
    service::lgr::LgrService,
};

pub static LGR_TAG: &str = "lgr";

/// List loyalty growth reward awards
#[utoipa::path(
    get,
    path = "/api/admin/lgr-awards",
    tag = LGR_TAG,
    params(LgrFilter, PageQuery),
    responses(
        (status = 200, description = "Success when listing LGR awards", body = LgrListDto),
        (status = 422, description = "Unknown status filter", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_lgr_awards(
    State(state): State<AppState>,
    Query(filter): Query<LgrFilter>,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, Error> {
    let awards = LgrService::new(&state.db)
        .list_awards(filter, page.page_index(), page.per_page())
        .await?;

    Ok((StatusCode::OK, Json(awards)))
}

/// Grant a loyalty growth reward to a member
#[utoipa::path(
    post,
    path = "/api/admin/lgr-awards",
    tag = LGR_TAG,
    request_body = GrantLgrDto,
    responses(
        (status = 201, description = "Success when granting an award", body = LgrAwardDto),
        (status = 404, description = "Member not found", body = MessageDto),
        (status = 422, description = "Invalid award parameters", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn grant_lgr(
    State(state): State<AppState>,
    Json(grant): Json<GrantLgrDto>,
) -> Result<impl IntoResponse, Error> {
    let award = LgrService::new(&state.db).grant(grant).await?;

    Ok((StatusCode::CREATED, Json(award)))
}

/// Apply a monthly credit to an active award
#[utoipa::path(
    post,
    path = "/api/admin/lgr-awards/{award_id}/credit",
    tag = LGR_TAG,
    params(
        ("award_id" = i32, Path, description = "Award ID")
    ),
    responses(
        (status = 200, description = "Success when crediting an award", body = LgrAwardDto),
        (status = 404, description = "Award not found", body = MessageDto),
        (status = 409, description = "Award is not active", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn credit_lgr(
    State(state): State<AppState>,
    Path(award_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let award = LgrService::new(&state.db).credit(award_id).await?;

    Ok((StatusCode::OK, Json(award)))
}

/// Cancel an active award
#[utoipa::path(
    post,
    path = "/api/admin/lgr-awards/{award_id}/cancel",
    tag = LGR_TAG,
    params(
        ("award_id" = i32, Path, description = "Award ID")
    ),
    responses(
        (status = 200, description = "Success when cancelling an award", body = LgrAwardDto),
        (status = 404, description = "Award not found", body = MessageDto),
        (status = 409, description = "Award is not active", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn cancel_lgr(
    State(state): State<AppState>,
    Path(award_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let award = LgrService::new(&state.db).cancel(award_id).await?;

    Ok((StatusCode::OK, Json(award)))
}
