use sea_orm::ActiveEnum;

use crate::error::Error;

pub mod analytics;
pub mod commission;
pub mod dashboard;
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

/// Parses a raw status string into its string-backed database enum,
/// rejecting unknown values as a validation failure.
pub(crate) fn parse_enum<T>(raw: &str) -> Result<T, Error>
where
    T: ActiveEnum<Value = String>,
{
    T::try_from_value(&raw.to_string())
        .map_err(|_| Error::Validation(format!("Unknown status value: {raw:?}")))
}
