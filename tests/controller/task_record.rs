//! Tests for the task record endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tally::{
    model::billing::TaskRecordEditDto,
    server::controller::task_record::{recalculate_task, update_task},
};

use super::*;

/// Expected: 200 OK
#[tokio::test]
async fn update_returns_ok() -> Result<(), TestError> {
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

    let edit = TaskRecordEditDto {
        actual_working_hours: Some(150.0),
        ..Default::default()
    };
    let result = update_task(State(app_state(&test)), Path(task.id), Json(edit)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expected: 400 Bad Request for negative hours
#[tokio::test]
async fn update_rejects_negative_hours() -> Result<(), TestError> {
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

    let edit = TaskRecordEditDto {
        actual_working_hours: Some(-3.0),
        ..Default::default()
    };
    let result = update_task(State(app_state(&test)), Path(task.id), Json(edit)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

/// Expected: 404 Not Found for a record that does not exist
#[tokio::test]
async fn recalculate_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let result = recalculate_task(State(app_state(&test)), Path(1)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expected: 500 Internal Server Error when tables are missing
#[tokio::test]
async fn recalculate_fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = recalculate_task(State(app_state(&test)), Path(1)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    Ok(())
}
