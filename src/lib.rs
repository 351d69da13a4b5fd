//! Trellis admin backend.
//!
//! This crate is the administrative backend for the Trellis investment & referral
//! platform: dashboards, CRUD and moderation endpoints, report generators, and CSV
//! exports over a relational store. Request handling follows a controller → service →
//! repository layering; multi-row admin actions (investment approval, profit
//! distribution, LGR crediting) run inside database transactions.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
