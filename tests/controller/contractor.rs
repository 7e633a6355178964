//! Tests for the contractor endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tally::{
    model::{billing::PricingPolicyDto, contractor::ContractorFormDto},
    server::controller::contractor::{
        create_contractor, delete_contractor, get_contractor, list_contractors,
        update_contractor,
    },
};

use super::*;

fn form(name: &str, lower: f64, upper: f64) -> ContractorFormDto {
    ContractorFormDto {
        name: name.to_string(),
        email: factory::email_for(name),
        client_name: "Acme".to_string(),
        project_name: "Portal".to_string(),
        policy: PricingPolicyDto {
            base_amount: TEST_BASE_AMOUNT,
            lower_hour_threshold: lower,
            upper_hour_threshold: upper,
            deduction_rate: TEST_DEDUCTION_RATE,
            overtime_rate: TEST_OVERTIME_RATE,
        },
        contract_start: None,
        contract_end: None,
    }
}

/// Expected: 201 Created
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let result = create_contractor(State(app_state(&test)), Json(form("Alice", 140.0, 180.0))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expected: 400 Bad Request for inverted thresholds
#[tokio::test]
async fn create_rejects_invalid_policy() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let result = create_contractor(State(app_state(&test)), Json(form("Alice", 180.0, 140.0))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 409 Conflict for an email already in use
#[tokio::test]
async fn create_rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_contractor("Alice")
        .build()
        .await?;

    let result = create_contractor(State(app_state(&test)), Json(form("Alice", 140.0, 180.0))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expected: 200 OK
#[tokio::test]
async fn list_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .with_contractor("Alice")
        .build()
        .await?;

    let result = list_contractors(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: 404 Not Found with an error body for a contractor that does not exist
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_billing_tables().build().await?;

    let result = get_contractor(State(app_state(&test)), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"], "Contractor ID 1 not found");

    Ok(())
}

/// Expected: 200 OK
#[tokio::test]
async fn update_returns_ok() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_billing_tables().build().await?;
    let contractor = test.billing().insert_contractor("Alice").await?;

    let result = update_contractor(
        State(app_state(&test)),
        Path(contractor.id),
        Json(form("Alice", 150.0, 170.0)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expected: 204 No Content, then 404 Not Found
#[tokio::test]
async fn delete_returns_no_content_then_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_billing_tables().build().await?;
    let contractor = test.billing().insert_contractor("Alice").await?;

    let result = delete_contractor(State(app_state(&test)), Path(contractor.id)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let result = delete_contractor(State(app_state(&test)), Path(contractor.id)).await;
    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
