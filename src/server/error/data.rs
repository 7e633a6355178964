use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum DataError {
    /// A uniqueness invariant would be broken: duplicate billing cycle month,
    /// duplicate task record for a (billing cycle, contractor) pair or duplicate
    /// contractor email.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Contractor ID {0} not found")]
    ContractorNotFound(i32),
    #[error("Billing cycle ID {0} not found")]
    BillingCycleNotFound(i32),
    #[error("Task record ID {0} not found")]
    TaskRecordNotFound(i32),
    #[error("Partner ID {0} not found")]
    PartnerNotFound(i32),
    #[error("Purchase order ID {0} not found")]
    PurchaseOrderNotFound(i32),
}

impl IntoResponse for DataError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::ConstraintViolation(_) => StatusCode::CONFLICT,
            _ => StatusCode::NOT_FOUND,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
