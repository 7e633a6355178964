//! Tests for TaskRecordService::recalculate.
//!
//! Saved amounts are not recalculated when a contractor's pricing policy changes. This
//! module verifies that the stale amount stays in place until the record is
//! recalculated or edited.

use tally::{
    model::{billing::PricingPolicyDto, contractor::ContractorFormDto},
    server::{
        billing::BillingCalculator,
        error::{data::DataError, Error},
        service::{contractor::ContractorService, task_record::TaskRecordService},
    },
};
use tally_test_utils::prelude::*;

fn raised_policy(contractor: &entity::contractor::Model) -> ContractorFormDto {
    ContractorFormDto {
        name: contractor.name.clone(),
        email: contractor.email.clone(),
        client_name: contractor.client_name.clone(),
        project_name: contractor.project_name.clone(),
        policy: PricingPolicyDto {
            base_amount: 600_000,
            lower_hour_threshold: TEST_LOWER_HOURS,
            upper_hour_threshold: TEST_UPPER_HOURS,
            deduction_rate: TEST_DEDUCTION_RATE,
            overtime_rate: TEST_OVERTIME_RATE,
        },
        contract_start: None,
        contract_end: None,
    }
}

/// Tests that a policy change leaves the saved amount stale until recalculated.
///
/// Expected: 500000 after the policy change, 600000 after recalculating
#[tokio::test]
async fn refreshes_amount_after_policy_change() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_billing_tables().build().await?;
    let cycle = test
        .billing()
        .insert_billing_cycle(factory::month(2025, 1))
        .await?;
    let contractor = test.billing().insert_contractor("Alice").await?;
    let task = test
        .billing()
        .insert_task_record(cycle.id, contractor.id, 150.0, TEST_BASE_AMOUNT)
        .await?;

    ContractorService::new(&test.db)
        .update(contractor.id, raised_policy(&contractor))
        .await
        .unwrap();

    let calculator = BillingCalculator::default();
    let task_service = TaskRecordService::new(&test.db, &calculator);

    let stale = task_service.get(task.id).await.unwrap();
    assert_eq!(stale.calculated_amount, TEST_BASE_AMOUNT);

    let refreshed = task_service.recalculate(task.id).await.unwrap();
    assert_eq!(refreshed.calculated_amount, 600_000);

    Ok(())
}

/// Tests recalculating a record that does not exist.
///
/// Expected: Err with TaskRecordNotFound
#[tokio::test]
async fn fails_for_nonexistent_record() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let calculator = BillingCalculator::default();
    let result = TaskRecordService::new(&test.db, &calculator)
        .recalculate(1)
        .await;

    assert!(matches!(
        result,
        Err(Error::DataError(DataError::TaskRecordNotFound(1)))
    ));

    Ok(())
}
