//! Tests for investment controller endpoints.
//!
//! This module contains integration tests for investment-related HTTP
//! endpoints, covering the approval and rejection flows.

mod approve_investment;
mod reject_investment;

use super::*;
