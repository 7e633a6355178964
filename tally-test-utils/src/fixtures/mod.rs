//! Test fixture modules for database record creation.
//!
//! - `billing` - contractors, billing cycles, task records and partners
//! - `purchase_order` - purchase-order document records

pub mod billing;
pub mod purchase_order;
