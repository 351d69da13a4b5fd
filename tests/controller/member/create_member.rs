//! Tests for the create_member endpoint.
//!
//! This module verifies the create_member endpoint's behavior, including
//! successful registration, duplicate email handling, and sponsor validation.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use trellis::{
    controller::member::create_member,
    model::{app::AppState, member::CreateMemberDto},
};

use super::*;

/// Tests successful member registration.
///
/// Verifies that the create_member endpoint returns a 201 CREATED response
/// when given a valid display name and a previously unused email address.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn success_with_new_email() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = create_member(
        State(state),
        Json(CreateMemberDto {
            display_name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            sponsor_id: None,
            tier: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests conflict response for an already registered email.
///
/// Verifies that the create_member endpoint returns a 409 CONFLICT response
/// when the email address is already taken, regardless of letter case.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_when_email_already_registered() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = create_member(
        State(state),
        Json(CreateMemberDto {
            display_name: "Other Alice".to_string(),
            email: "Alice@Example.com".to_string(),
            sponsor_id: None,
            tier: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests validation response for an unknown sponsor.
///
/// Verifies that the create_member endpoint returns a 422 UNPROCESSABLE ENTITY
/// response when the referenced sponsor does not exist.
///
/// Expected: Err with 422 UNPROCESSABLE_ENTITY response
#[tokio::test]
async fn validation_error_when_sponsor_unknown() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = create_member(
        State(state),
        Json(CreateMemberDto {
            display_name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            sponsor_id: Some(999),
            tier: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
