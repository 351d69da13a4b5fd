use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use sea_orm::ActiveEnum;

use crate::{
    data::{
        commission::CommissionRepository, investment::InvestmentRepository,
        member::MemberRepository,
    },
    error::Error,
    model::{api::MessageDto, app::AppState},
};

pub static EXPORT_TAG: &str = "export";

fn csv_response(filename: &str, data: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        data,
    )
        .into_response()
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, Error> {
    writer
        .into_inner()
        .map_err(|err| Error::InternalError(format!("Failed to flush CSV buffer: {err}")))
}

/// Download all members as CSV
#[utoipa::path(
    get,
    path = "/api/admin/exports/members.csv",
    tag = EXPORT_TAG,
    responses(
        (status = 200, description = "CSV file of all members", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn export_members(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let members = MemberRepository::new(&state.db).all().await?;

    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "id",
        "display_name",
        "email",
        "sponsor_id",
        "tier",
        "status",
        "joined_at",
    ])?;

    for member in members {
        writer.write_record([
            member.id.to_string(),
            member.display_name,
            member.email,
            member.sponsor_id.map(|id| id.to_string()).unwrap_or_default(),
            member.tier.to_string(),
            member.status.to_value(),
            member.joined_at.to_string(),
        ])?;
    }

    Ok(csv_response("members.csv", finish(writer)?))
}

/// Download all investments as CSV
#[utoipa::path(
    get,
    path = "/api/admin/exports/investments.csv",
    tag = EXPORT_TAG,
    responses(
        (status = 200, description = "CSV file of all investments", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn export_investments(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let investments = InvestmentRepository::new(&state.db).all().await?;

    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "id",
        "member_id",
        "tier",
        "amount",
        "status",
        "approved_at",
        "next_payment_date",
        "created_at",
    ])?;

    for investment in investments {
        writer.write_record([
            investment.id.to_string(),
            investment.member_id.to_string(),
            investment.tier.to_string(),
            investment.amount.to_string(),
            investment.status.to_value(),
            investment
                .approved_at
                .map(|at| at.to_string())
                .unwrap_or_default(),
            investment
                .next_payment_date
                .map(|at| at.to_string())
                .unwrap_or_default(),
            investment.created_at.to_string(),
        ])?;
    }

    Ok(csv_response("investments.csv", finish(writer)?))
}

/// Download all referral commissions as CSV
#[utoipa::path(
    get,
    path = "/api/admin/exports/commissions.csv",
    tag = EXPORT_TAG,
    responses(
        (status = 200, description = "CSV file of all commissions", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn export_commissions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let commissions = CommissionRepository::new(&state.db).all().await?;

    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "id",
        "earner_id",
        "source_id",
        "investment_id",
        "level",
        "rate",
        "amount",
        "status",
        "created_at",
    ])?;

    for commission in commissions {
        writer.write_record([
            commission.id.to_string(),
            commission.earner_id.to_string(),
            commission.source_id.to_string(),
            commission.investment_id.to_string(),
            commission.level.to_string(),
            commission.rate.to_string(),
            commission.amount.to_string(),
            commission.status.to_value(),
            commission.created_at.to_string(),
        ])?;
    }

    Ok(csv_response("commissions.csv", finish(writer)?))
}
