//! Error types for the Tally server application.
//!
//! Domain failures are split by concern (billing rules, stored records, configuration) and
//! aggregated into a single [`Error`]. All errors implement `IntoResponse` for Axum HTTP
//! responses and use `thiserror` for their `Display` and `Error` implementations.

pub mod billing;
pub mod config;
pub mod data;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{billing::BillingError, config::ConfigError, data::DataError},
};

/// Main error type for the Tally server application.
///
/// Database errors caused by a unique constraint are promoted to
/// [`DataError::ConstraintViolation`] when converted with `?`, every other database
/// error is kept as [`Error::DbErr`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Billing rule error (invalid pricing policy or hours).
    #[error(transparent)]
    BillingError(#[from] BillingError),
    /// Stored record error (missing record, uniqueness violation).
    #[error(transparent)]
    DataError(#[from] DataError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Tally's code.
    #[error("Internal error with Tally's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, foreign key violations).
    #[error(transparent)]
    DbErr(DbErr),
    /// IO error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Self::DataError(DataError::ConstraintViolation(detail))
            }
            _ => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid pricing policy, hours or request values
/// - 404 Not Found - Referenced record does not exist
/// - 409 Conflict - Uniqueness constraint violated
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::BillingError(err) => err.into_response(),
            Self::DataError(err) => err.into_response(),
            Self::ParseError(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Failed to parse value: {}", message),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
