//! Tests for the approve_investment endpoint.
//!
//! This module verifies the approve_investment endpoint's behavior, including
//! successful approval of pending investments, the pending-only rule, and
//! missing investment handling.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::investment::InvestmentStatus;
use trellis::{controller::investment::approve_investment, model::app::AppState};

use super::*;

/// Tests successful approval of a pending investment.
///
/// Verifies that the approve_investment endpoint returns a 200 OK response
/// when the investment is still pending. The investor here has no matrix
/// position yet, so the approval completes without paying commissions.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_pending_investment() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let member = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let investment =
        factory::create_investment(&setup.db, member.id, 1000, InvestmentStatus::Pending).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = approve_investment(State(state), Path(investment.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests conflict response for an already decided investment.
///
/// Verifies that the approve_investment endpoint returns a 409 CONFLICT
/// response when the investment has already been approved.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_when_investment_not_pending() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let member = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let investment =
        factory::create_investment(&setup.db, member.id, 1000, InvestmentStatus::Active).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = approve_investment(State(state), Path(investment.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests 404 response for a missing investment.
///
/// Verifies that the approve_investment endpoint returns a 404 NOT FOUND
/// response when no investment exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_investment_missing() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = approve_investment(State(state), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
