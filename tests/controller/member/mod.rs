//! Tests for member controller endpoints.
//!
//! This module contains integration tests for member-related HTTP endpoints,
//! including registration, detail retrieval, and status updates.

mod create_member;
mod get_member;
mod update_member_status;

use super::*;
