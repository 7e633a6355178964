//! Factory functions for generating billing database models.
//!
//! Pure functions that build models in memory with standard test values. Nothing here
//! touches the database, which makes them suitable for unit tests of code that only
//! reads a model's fields.

use chrono::{NaiveDate, Utc};

use crate::constant::{
    TEST_BASE_AMOUNT, TEST_DEDUCTION_RATE, TEST_LOWER_HOURS, TEST_OVERTIME_RATE, TEST_UPPER_HOURS,
};

/// Email address used for a mock contractor with the given name.
pub fn email_for(name: &str) -> String {
    format!(
        "{}@example.com",
        name.to_lowercase().replace(char::is_whitespace, ".")
    )
}

/// Create a mock contractor model with the standard test pricing policy.
pub fn mock_contractor_model(id: i32, name: &str) -> entity::contractor::Model {
    let now = Utc::now().naive_utc();
    entity::contractor::Model {
        id,
        name: name.to_string(),
        email: email_for(name),
        client_name: "Test Client".to_string(),
        project_name: "Test Project".to_string(),
        base_amount: TEST_BASE_AMOUNT,
        lower_hour_threshold: TEST_LOWER_HOURS,
        upper_hour_threshold: TEST_UPPER_HOURS,
        deduction_rate: TEST_DEDUCTION_RATE,
        overtime_rate: TEST_OVERTIME_RATE,
        contract_start: None,
        contract_end: None,
        created_at: now,
        updated_at: now,
    }
}

/// Create a mock partner model with the standard test pricing policy.
pub fn mock_partner_model(id: i32, name: &str) -> entity::partner::Model {
    entity::partner::Model {
        id,
        name: name.to_string(),
        contact_person: None,
        base_amount: TEST_BASE_AMOUNT,
        lower_hour_threshold: TEST_LOWER_HOURS,
        upper_hour_threshold: TEST_UPPER_HOURS,
        deduction_rate: TEST_DEDUCTION_RATE,
        overtime_rate: TEST_OVERTIME_RATE,
        is_active: true,
        created_at: Utc::now().naive_utc(),
    }
}

/// First day of the given month; panics on an invalid month as it is test-only.
pub fn month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("invalid test month")
}
