//! HTTP controller endpoints for the Tally web API.
//!
//! This module contains the Axum handlers of the JSON API. Controllers extract path,
//! query and body values, call into the service layer and return appropriate HTTP
//! responses. Failures are returned as [`Error`](crate::server::error::Error), which
//! renders the status code and error body. Every handler is annotated with utoipa for
//! OpenAPI documentation.

pub mod billing_cycle;
pub mod contractor;
pub mod partner;
pub mod purchase_order;
pub mod task_record;
