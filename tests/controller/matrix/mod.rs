//! Tests for matrix controller endpoints.
//!
//! This module contains integration tests for matrix-related HTTP endpoints,
//! covering member placement and downline tree retrieval.

mod get_tree;
mod place_member;

use super::*;
