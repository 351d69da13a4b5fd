pub mod commission;
pub mod dashboard;
pub mod export;
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
