//! Tests for PurchaseOrderService.

use chrono::NaiveDate;
use tally::server::{
    error::{data::DataError, Error},
    service::purchase_order::PurchaseOrderService,
};
use tally_test_utils::prelude::*;

/// Tests recording a purchase order and counting its downloads.
///
/// Expected: the record starts at zero downloads and counts each one
#[tokio::test]
async fn records_order_and_counts_downloads() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PurchaseOrder)
        .build()
        .await?;

    let received_at = NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();

    let order_service = PurchaseOrderService::new(&test.db);
    let order = order_service
        .create("Acme", "purchase_orders/2025/01/acme.pdf", received_at)
        .await
        .unwrap();
    assert_eq!(order.download_count, 0);

    let downloaded = order_service.record_download(order.id).await.unwrap();
    assert_eq!(downloaded.download_count, 1);
    assert_eq!(downloaded.file_path, "purchase_orders/2025/01/acme.pdf");

    Ok(())
}

/// Tests deleting a purchase order twice.
///
/// Expected: Ok, then Err with PurchaseOrderNotFound
#[tokio::test]
async fn delete_fails_once_removed() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::PurchaseOrder)
        .build()
        .await?;
    let received_at = NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    let order = test
        .purchase_order()
        .insert_purchase_order("Acme", received_at)
        .await?;

    let order_service = PurchaseOrderService::new(&test.db);
    assert!(order_service.delete(order.id).await.is_ok());

    let result = order_service.delete(order.id).await;
    assert!(matches!(
        result,
        Err(Error::DataError(DataError::PurchaseOrderNotFound(_)))
    ));

    Ok(())
}
