//! Tests for BillingCycleService::set_completed.

use tally::server::{
    billing::BillingCalculator,
    error::{data::DataError, Error},
    service::billing_cycle::BillingCycleService,
};
use tally_test_utils::prelude::*;

/// Tests marking a cycle as completed.
///
/// Verifies that completing a cycle leaves its task records editable.
///
/// Expected: Ok with is_completed set
#[tokio::test]
async fn marks_cycle_completed() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_billing_tables().build().await?;
    let cycle = test
        .billing()
        .insert_billing_cycle(factory::month(2025, 1))
        .await?;

    let calculator = BillingCalculator::default();
    let updated = BillingCycleService::new(&test.db, &calculator)
        .set_completed(cycle.id, true)
        .await
        .unwrap();

    assert!(updated.is_completed);

    Ok(())
}

/// Tests completing a cycle that does not exist.
///
/// Expected: Err with BillingCycleNotFound
#[tokio::test]
async fn fails_for_nonexistent_cycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let calculator = BillingCalculator::default();
    let result = BillingCycleService::new(&test.db, &calculator)
        .set_completed(1, true)
        .await;

    assert!(matches!(
        result,
        Err(Error::DataError(DataError::BillingCycleNotFound(1)))
    ));

    Ok(())
}
