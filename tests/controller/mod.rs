//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! calling the handlers directly and verifying the status codes they respond with for
//! successful requests, invalid input, missing records and constraint violations.

mod contractor;
mod partner;
mod purchase_order;
mod task_record;

use tally::server::model::app::AppState;
use tally_test_utils::prelude::*;

fn app_state(test: &TestContext) -> AppState {
    test.to_app_state()
}
