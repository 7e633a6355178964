//! Tests for the partner endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tally::{model::billing::QuoteQuery, server::controller::partner::quote_partner};

use super::*;

/// Expected: 200 OK
#[tokio::test]
async fn quote_returns_ok() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Partner)
        .build()
        .await?;
    let partner = test.billing().insert_partner("Globex").await?;

    let result = quote_partner(
        State(app_state(&test)),
        Path(partner.id),
        Query(QuoteQuery { hours: 150.0 }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expected: 404 Not Found for a partner that does not exist
#[tokio::test]
async fn quote_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Partner)
        .build()
        .await?;

    let result = quote_partner(
        State(app_state(&test)),
        Path(1),
        Query(QuoteQuery { hours: 150.0 }),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
