//! Database entity definitions for the Trellis admin platform.

pub mod prelude;

pub mod investment;
pub mod lgr_award;
pub mod listing;
pub mod matrix_position;
pub mod member;
pub mod point_transaction;
pub mod profit_distribution;
pub mod profit_share;
pub mod referral_commission;
pub mod support_ticket;
pub mod venture;
pub mod wedding_card;
