use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    // Wrong-state transitions (approving a non-pending investment, crediting
    // a completed award, placing into a full matrix) and uniqueness clashes.
    #[error("{0}")]
    Conflict(String),
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("{0}")]
    InternalError(String),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    CsvError(#[from] csv::Error),
}

impl Error {
    fn envelope(status: StatusCode, message: String) -> Response {
        (
            status,
            Json(MessageDto {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound(what) => {
                debug!("Not found: {}", what);

                Error::envelope(StatusCode::NOT_FOUND, format!("{} not found", what))
            }
            Error::Validation(message) => {
                debug!("Validation error: {}", message);

                Error::envelope(StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            Error::Conflict(message) => {
                debug!("Conflict: {}", message);

                Error::envelope(StatusCode::CONFLICT, message)
            }
            err => {
                error!("Internal server error: {}", err);

                Error::envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}
