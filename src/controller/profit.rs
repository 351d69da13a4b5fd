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
        profit::{CreateDistributionDto, DistributionDetailDto, DistributionDto},
    },
    service::profit::ProfitService,
};

pub static PROFIT_TAG: &str = "profit";

/// List completed profit distributions
#[utoipa::path(
    get,
    path = "/api/admin/profit-distributions",
    tag = PROFIT_TAG,
    responses(
        (status = 200, description = "Success when listing distributions", body = Vec<DistributionDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_distributions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let distributions = ProfitService::new(&state.db).list_distributions().await?;

    Ok((StatusCode::OK, Json(distributions)))
}

/// Run a profit distribution for a period
#[utoipa::path(
    post,
    path = "/api/admin/profit-distributions",
    tag = PROFIT_TAG,
    request_body = CreateDistributionDto,
    responses(
        (status = 201, description = "Success when running a distribution", body = DistributionDetailDto),
        (status = 409, description = "Period already distributed", body = MessageDto),
        (status = 422, description = "Invalid distribution parameters", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_distribution(
    State(state): State<AppState>,
    Json(request): Json<CreateDistributionDto>,
) -> Result<impl IntoResponse, Error> {
    let detail = ProfitService::new(&state.db).create_distribution(request).await?;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// Get a distribution with its member shares
#[utoipa::path(
    get,
    path = "/api/admin/profit-distributions/{distribution_id}",
    tag = PROFIT_TAG,
    params(
        ("distribution_id" = i32, Path, description = "Distribution ID")
    ),
    responses(
        (status = 200, description = "Success when retrieving a distribution", body = DistributionDetailDto),
        (status = 404, description = "Distribution not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_distribution(
    State(state): State<AppState>,
    Path(distribution_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let detail = ProfitService::new(&state.db)
        .get_distribution(distribution_id)
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}
