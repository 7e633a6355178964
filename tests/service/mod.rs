//! Tests for the service layer.
//!
//! These tests run the services against an in-memory SQLite database built by
//! `TestBuilder`, covering billing cycle initialization, task record recalculation and
//! the contractor, partner and purchase order registries.

mod billing_cycle;
mod partner;
mod purchase_order;
