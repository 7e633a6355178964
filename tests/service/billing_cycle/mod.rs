//! Tests for BillingCycleService.

mod get_cycle_detail;
mod set_completed;
