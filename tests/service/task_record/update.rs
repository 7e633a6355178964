//! Tests for TaskRecordService::update.
//!
//! This module verifies that every edit recalculates the payable amount from the
//! contractor's pricing policy across all three tiers, and that invalid input leaves the
//! stored record unchanged.

use tally::{
    model::billing::{TaskRecordEditDto, TaskStatusDto},
    server::{
        billing::BillingCalculator,
        error::{billing::BillingError, data::DataError, Error},
        service::task_record::TaskRecordService,
    },
};
use tally_test_utils::prelude::*;

fn hours(actual_working_hours: f64) -> TaskRecordEditDto {
    TaskRecordEditDto {
        actual_working_hours: Some(actual_working_hours),
        ..Default::default()
    }
}

/// Tests the payable amount of each tier under the standard test policy.
///
/// Policy: base 500000, thresholds 140 and 180, deduction 3000, overtime 4000.
///
/// Expected: 150h → 500000, 130h → 470000, 190h → 540000, 0h → 0
#[tokio::test]
async fn calculates_amount_for_each_tier() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_billing_tables().build().await?;
    let cycle = test
        .billing()
        .insert_billing_cycle(factory::month(2025, 1))
        .await?;
    let contractor = test.billing().insert_contractor("Alice").await?;
    let task = test
        .billing()
        .insert_task_record(cycle.id, contractor.id, 0.0, 0)
        .await?;

    let calculator = BillingCalculator::default();
    let task_service = TaskRecordService::new(&test.db, &calculator);

    for (actual_working_hours, expected) in [
        (150.0, 500_000),
        (130.0, 470_000),
        (190.0, 540_000),
        (140.0, 500_000),
        (180.0, 500_000),
        (0.0, 0),
    ] {
        let saved = task_service
            .update(task.id, hours(actual_working_hours))
            .await
            .unwrap();

        assert_eq!(
            saved.calculated_amount, expected,
            "amount mismatch for {} hours",
            actual_working_hours
        );
    }

    Ok(())
}

/// Tests an edit of only the bookkeeping fields.
///
/// Expected: fields saved, amount recalculated from the stored hours
#[tokio::test]
async fn saves_bookkeeping_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_billing_tables().build().await?;
    let cycle = test
        .billing()
        .insert_billing_cycle(factory::month(2025, 1))
        .await?;
    let contractor = test.billing().insert_contractor("Alice").await?;
    // Stored amount is out of date for 190 hours
    let task = test
        .billing()
        .insert_task_record(cycle.id, contractor.id, 190.0, 0)
        .await?;

    let calculator = BillingCalculator::default();
    let edit = TaskRecordEditDto {
        status: Some(TaskStatusDto::Completed),
        recorded_hours: Some(188.5),
        payment_amount: Some(540_000),
        document_url: Some(Some("https://files.example.com/invoice.pdf".to_string())),
        actual_working_hours: None,
    };
    let saved = TaskRecordService::new(&test.db, &calculator)
        .update(task.id, edit)
        .await
        .unwrap();

    assert_eq!(saved.status, TaskStatusDto::Completed);
    assert_eq!(saved.recorded_hours, 188.5);
    assert_eq!(saved.payment_amount, 540_000);
    assert_eq!(
        saved.document_url.as_deref(),
        Some("https://files.example.com/invoice.pdf")
    );
    assert_eq!(saved.calculated_amount, 540_000);
    assert_eq!(
        saved.contractor.as_ref().map(|c| c.id),
        Some(contractor.id)
    );

    Ok(())
}

/// Tests rejecting hours that are not a number.
///
/// Expected: Err with InvalidHours
#[tokio::test]
async fn rejects_non_finite_hours() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_billing_tables().build().await?;
    let cycle = test
        .billing()
        .insert_billing_cycle(factory::month(2025, 1))
        .await?;
    let contractor = test.billing().insert_contractor("Alice").await?;
    let task = test
        .billing()
        .insert_task_record(cycle.id, contractor.id, 0.0, 0)
        .await?;

    let calculator = BillingCalculator::default();
    let result = TaskRecordService::new(&test.db, &calculator)
        .update(task.id, hours(f64::NAN))
        .await;

    assert!(matches!(
        result,
        Err(Error::BillingError(BillingError::InvalidHours(_)))
    ));

    Ok(())
}

/// Tests rejecting an edit of a record whose contractor policy is invalid.
///
/// Expected: Err with InvalidPolicy
#[tokio::test]
async fn rejects_invalid_contractor_policy() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_billing_tables().build().await?;
    let cycle = test
        .billing()
        .insert_billing_cycle(factory::month(2025, 1))
        .await?;
    let contractor = test
        .billing()
        .insert_contractor_with_policy("Alice", 500_000, 180.0, 140.0, 3_000, 4_000)
        .await?;
    let task = test
        .billing()
        .insert_task_record(cycle.id, contractor.id, 0.0, 0)
        .await?;

    let calculator = BillingCalculator::default();
    let result = TaskRecordService::new(&test.db, &calculator)
        .update(task.id, hours(160.0))
        .await;

    assert!(matches!(
        result,
        Err(Error::BillingError(BillingError::InvalidPolicy { .. }))
    ));

    Ok(())
}

/// Tests editing a record that does not exist.
///
/// Expected: Err with TaskRecordNotFound
#[tokio::test]
async fn fails_for_nonexistent_record() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let calculator = BillingCalculator::default();
    let result = TaskRecordService::new(&test.db, &calculator)
        .update(1, hours(150.0))
        .await;

    assert!(matches!(
        result,
        Err(Error::DataError(DataError::TaskRecordNotFound(1)))
    ));

    Ok(())
}
