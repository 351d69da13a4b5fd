//! Data access layer repositories.
//!
//! Repositories wrap the sea-orm queries for one aggregate each. They are
//! generic over the connection so services can run them against either the
//! pooled connection or an open transaction.

pub mod commission;
pub mod investment;
pub mod lgr;
pub mod listing;
pub mod matrix;
pub mod member;
pub mod points;
pub mod profit;
pub mod ticket;
pub mod venture;
pub mod wedding_card;
