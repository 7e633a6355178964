//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't need to spell out the generated
//! `entity` crate paths.

/// Type alias for contractor database model.
///
/// # Fields (from `entity::contractor::Model`)
/// - `id` - Primary key
/// - `name` - Contractor's name
/// - `email` - Contact email address (unique)
/// - `client_name`, `project_name` - Engagement metadata, may be empty
/// - `base_amount`, `lower_hour_threshold`, `upper_hour_threshold`, `deduction_rate`,
///   `overtime_rate` - Embedded pricing policy
/// - `contract_start`, `contract_end` - Optional contract period
/// - `created_at`, `updated_at` - Record timestamps
pub type ContractorModel = entity::contractor::Model;

/// Type alias for billing cycle database model.
///
/// # Fields (from `entity::billing_cycle::Model`)
/// - `id` - Primary key
/// - `year_month` - First day of the cycle's month (unique)
/// - `is_completed` - Informational completion flag
pub type BillingCycleModel = entity::billing_cycle::Model;

/// Type alias for task record database model.
///
/// Represents one contractor's status within one billing cycle. At most one task record
/// exists per (billing cycle, contractor) pair.
///
/// # Fields (from `entity::task_record::Model`)
/// - `id` - Primary key
/// - `billing_cycle_id`, `contractor_id` - Owning cycle and contractor
/// - `status` - Progress status
/// - `recorded_hours` - Hours as entered on the contractor's time sheet
/// - `payment_amount` - Manually entered payment amount
/// - `document_url` - Optional reference document link
/// - `actual_working_hours` - Hours the payable amount is calculated from
/// - `calculated_amount` - Payable amount as of the last save
/// - `updated_at` - Timestamp of the last save
pub type TaskRecordModel = entity::task_record::Model;

/// Type alias for partner database model.
pub type PartnerModel = entity::partner::Model;

/// Type alias for purchase order database model.
pub type PurchaseOrderModel = entity::purchase_order::Model;
