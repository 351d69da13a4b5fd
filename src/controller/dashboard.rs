use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::MessageDto,
        app::AppState,
        report::{DashboardDto, RewardReportDto},
    },
    service::{analytics::AnalyticsService, dashboard::DashboardService},
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the admin dashboard metrics
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Success when retrieving dashboard metrics", body = DashboardDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let dashboard = DashboardService::new(&state.db).metrics().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Get the reward program analytics report
#[utoipa::path(
    get,
    path = "/api/admin/reports/rewards",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Success when retrieving the reward report", body = RewardReportDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_reward_report(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let report = AnalyticsService::new(&state.db).reward_report().await?;

    Ok((StatusCode::OK, Json(report)))
}
