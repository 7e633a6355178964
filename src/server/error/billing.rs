use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Violations of the billing rules' input requirements.
#[derive(Error, Debug, PartialEq)]
pub enum BillingError {
    /// Pricing policy thresholds cannot classify hours consistently.
    #[error("Invalid pricing policy: {reason}")]
    InvalidPolicy { reason: String },
    /// Hours are negative or not a finite number.
    #[error("Invalid working hours {0}: hours must be a finite, non-negative number")]
    InvalidHours(f64),
}

impl IntoResponse for BillingError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
