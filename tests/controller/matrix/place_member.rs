//! Tests for the place_member endpoint.
//!
//! This module verifies the place_member endpoint's behavior, including root
//! placement, the single-root rule, and the one-position-per-member rule.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use trellis::{
    controller::matrix::place_member,
    model::{app::AppState, matrix::PlaceMemberDto},
};

use super::*;

/// Tests successful placement of the first member as root.
///
/// Verifies that the place_member endpoint returns a 201 CREATED response
/// when placing a member with no sponsor into an empty matrix.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn success_placing_root() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let member = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = place_member(
        State(state),
        Json(PlaceMemberDto {
            member_id: member.id,
            sponsor_id: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests conflict response when a second root is requested.
///
/// Verifies that the place_member endpoint returns a 409 CONFLICT response
/// when a root position already exists and another sponsorless placement is
/// requested.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_when_root_already_exists() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let root = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    factory::create_position(&setup.db, root.id, None, 0, 0).await?;
    let member = factory::create_member(&setup.db, "Bob", "bob@example.com", None).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = place_member(
        State(state),
        Json(PlaceMemberDto {
            member_id: member.id,
            sponsor_id: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests conflict response for an already placed member.
///
/// Verifies that the place_member endpoint returns a 409 CONFLICT response
/// when the member already holds a matrix position.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn conflict_when_member_already_placed() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let root = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    factory::create_position(&setup.db, root.id, None, 0, 0).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = place_member(
        State(state),
        Json(PlaceMemberDto {
            member_id: root.id,
            sponsor_id: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
