//! Service layer for business logic.
//!
//! This module contains the services that validate input, coordinate repositories and
//! map missing records to domain errors. Services include the contractor and partner
//! registries, billing cycle initialization, task record edits and the purchase order
//! ledger.

pub mod billing_cycle;
pub mod contractor;
pub mod partner;
pub mod purchase_order;
pub mod task_record;
