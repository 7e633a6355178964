//! Tests for the purchase order endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tally::server::controller::purchase_order::{
    delete_purchase_order, download_purchase_order, list_purchase_orders,
};

use super::*;

/// Expected: 200 OK for download and list, 204 No Content for delete
#[tokio::test]
async fn download_list_and_delete() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::PurchaseOrder)
        .build()
        .await?;
    let received_at = factory::month(2025, 1).and_hms_opt(9, 0, 0).unwrap();
    let order = test
        .purchase_order()
        .insert_purchase_order("Acme", received_at)
        .await?;

    let result = download_purchase_order(State(app_state(&test)), Path(order.id)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = list_purchase_orders(State(app_state(&test))).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = delete_purchase_order(State(app_state(&test)), Path(order.id)).await;
    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );

    Ok(())
}

/// Expected: 404 Not Found for a purchase order that does not exist
#[tokio::test]
async fn download_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PurchaseOrder)
        .build()
        .await?;

    let result = download_purchase_order(State(app_state(&test)), Path(1)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
