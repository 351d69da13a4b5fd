//! Shared helpers used across services.

pub mod time;
