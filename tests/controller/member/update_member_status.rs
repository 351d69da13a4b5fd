//! Tests for the update_member_status endpoint.
//!
//! This module verifies the update_member_status endpoint's behavior,
//! including successful status changes and rejection of unknown status
//! values.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use trellis::{
    controller::member::update_member_status,
    model::{app::AppState, member::UpdateMemberStatusDto},
};

use super::*;

/// Tests successful member status update.
///
/// Verifies that the update_member_status endpoint returns a 200 OK response
/// when suspending an existing member.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_when_suspending_member() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let member = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = update_member_status(
        State(state),
        Path(member.id),
        Json(UpdateMemberStatusDto {
            status: "suspended".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests validation response for an unknown status value.
///
/// Verifies that the update_member_status endpoint returns a 422
/// UNPROCESSABLE ENTITY response when the status string does not map to a
/// known member status.
///
/// Expected: Err with 422 UNPROCESSABLE_ENTITY response
#[tokio::test]
async fn validation_error_when_status_unknown() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let member = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = update_member_status(
        State(state),
        Path(member.id),
        Json(UpdateMemberStatusDto {
            status: "bogus".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Tests 404 response for a missing member.
///
/// Verifies that the update_member_status endpoint returns a 404 NOT FOUND
/// response when no member exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_member_missing() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = update_member_status(
        State(state),
        Path(999),
        Json(UpdateMemberStatusDto {
            status: "active".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
