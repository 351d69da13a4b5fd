//! Tests for the reject_investment endpoint.
//!
//! This module verifies the reject_investment endpoint's behavior, including
//! successful rejection with a reason and the required-reason rule.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::investment::InvestmentStatus;
use trellis::{
    controller::investment::reject_investment,
    model::{app::AppState, investment::RejectDto},
};

use super::*;

/// Tests successful rejection of a pending investment.
///
/// Verifies that the reject_investment endpoint returns a 200 OK response
/// when the investment is pending and a reason is supplied.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_reason() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let member = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let investment =
        factory::create_investment(&setup.db, member.id, 1000, InvestmentStatus::Pending).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = reject_investment(
        State(state),
        Path(investment.id),
        Json(RejectDto {
            reason: "Unverified payment proof".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests validation response for a blank rejection reason.
///
/// Verifies that the reject_investment endpoint returns a 422 UNPROCESSABLE
/// ENTITY response when the reason is empty or whitespace.
///
/// Expected: Err with 422 UNPROCESSABLE_ENTITY response
#[tokio::test]
async fn validation_error_when_reason_blank() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let member = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let investment =
        factory::create_investment(&setup.db, member.id, 1000, InvestmentStatus::Pending).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = reject_investment(
        State(state),
        Path(investment.id),
        Json(RejectDto {
            reason: "   ".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
