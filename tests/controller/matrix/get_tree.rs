//! Tests for the get_tree endpoint.
//!
//! This module verifies the get_tree endpoint's behavior, including downline
//! retrieval for a placed member and the missing-position case.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use trellis::{
    controller::matrix::get_tree,
    model::{app::AppState, matrix::TreeQuery},
};

use super::*;

/// Tests successful downline tree retrieval.
///
/// Verifies that the get_tree endpoint returns a 200 OK response for a placed
/// member with a small downline, using the default depth.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_placed_member() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let root = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let child = factory::create_member(&setup.db, "Bob", "bob@example.com", Some(root.id)).await?;
    let root_position = factory::create_position(&setup.db, root.id, None, 0, 0).await?;
    factory::create_position(&setup.db, child.id, Some(root_position.id), 1, 0).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = get_tree(State(state), Path(root.id), Query(TreeQuery { depth: None })).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 404 response for an unplaced member.
///
/// Verifies that the get_tree endpoint returns a 404 NOT FOUND response when
/// the member has no matrix position.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn not_found_when_member_not_placed() -> Result<(), TestError> {
    let setup = test_setup_with_member_tables!()?;
    let member = factory::create_member(&setup.db, "Alice", "alice@example.com", None).await?;
    let state = AppState {
        db: setup.db.clone(),
    };

    let result = get_tree(State(state), Path(member.id), Query(TreeQuery { depth: None })).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
