//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organized by the
//! record they own. Lookups return `Option` for missing rows and leave the mapping to
//! domain errors to the service layer.

pub mod billing_cycle;
pub mod contractor;
pub mod partner;
pub mod purchase_order;
pub mod task_record;
