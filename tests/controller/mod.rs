//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP
//! controllers, verifying request handling, response status codes, and error
//! handling for the admin API endpoints.

mod investment;
mod matrix;
mod member;

use trellis_test_utils::prelude::*;
