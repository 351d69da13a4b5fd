//! Application state and API data transfer objects.

pub mod api;
pub mod app;
pub mod commission;
pub mod investment;
pub mod lgr;
pub mod listing;
pub mod matrix;
pub mod member;
pub mod points;
pub mod profit;
pub mod report;
pub mod ticket;
pub mod venture;
pub mod wedding_card;
