//! Tests for BillingCycleService::get_cycle_detail and list.

use tally::server::{
    billing::BillingCalculator,
    error::{data::DataError, Error},
    service::billing_cycle::BillingCycleService,
};
use tally_test_utils::prelude::*;

/// Tests that a cycle is returned with its task records ordered by contractor name.
///
/// Expected: Ok with records of Alice then Bob
#[tokio::test]
async fn returns_tasks_ordered_by_contractor_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_contractor("Bob")
        .with_contractor("Alice")
        .build()
        .await?;

    let calculator = BillingCalculator::default();
    let cycle_service = BillingCycleService::new(&test.db, &calculator);
    let cycle = cycle_service
        .initialize_cycle(factory::month(2025, 1))
        .await
        .unwrap();

    let detail = cycle_service.get_cycle_detail(cycle.id).await.unwrap();

    assert_eq!(detail.cycle.id, cycle.id);
    let names: Vec<_> = detail
        .tasks
        .iter()
        .filter_map(|task| task.contractor.as_ref().map(|c| c.name.clone()))
        .collect();
    assert_eq!(names, vec!["Alice".to_string(), "Bob".to_string()]);

    Ok(())
}

/// Tests retrieving a cycle that does not exist.
///
/// Expected: Err with BillingCycleNotFound
#[tokio::test]
async fn fails_for_nonexistent_cycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let calculator = BillingCalculator::default();
    let result = BillingCycleService::new(&test.db, &calculator)
        .get_cycle_detail(1)
        .await;

    assert!(matches!(
        result,
        Err(Error::DataError(DataError::BillingCycleNotFound(1)))
    ));

    Ok(())
}

/// Tests listing cycles.
///
/// Expected: newest month first
#[tokio::test]
async fn lists_newest_month_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_billing_cycle(factory::month(2025, 1))
        .with_billing_cycle(factory::month(2025, 3))
        .build()
        .await?;

    let calculator = BillingCalculator::default();
    let cycles = BillingCycleService::new(&test.db, &calculator)
        .list()
        .await
        .unwrap();

    let months: Vec<_> = cycles.iter().map(|cycle| cycle.year_month).collect();
    assert_eq!(months, vec![factory::month(2025, 3), factory::month(2025, 1)]);

    Ok(())
}
