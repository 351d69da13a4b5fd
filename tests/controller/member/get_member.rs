//! Tests for the get_member endpoint.
//!
//! This module verifies the get_member endpoint's behavior, including
//! successful detail retrieval, missing member handling, and error handling
//! for database issues.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use trellis::{controller::member::get_member, model::app::AppState};

use super::*;

/// Tests successful member detail retrieval.
///
/// Verifies that the get_member endpoint returns a 200 OK response with the
/// member's detail view when the member exists.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_existing_member() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let member = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = get_member(State(state), Path(member.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 404 response for a missing member.
///
/// Verifies that the get_member endpoint returns a 404 NOT FOUND response
/// when no member exists with the requested ID.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_member_missing() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = get_member(State(state), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the get_member endpoint returns a 500 INTERNAL SERVER ERROR
/// response when required database tables don't exist.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let setup = test_setup_with_tables!()?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = get_member(State(state), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
