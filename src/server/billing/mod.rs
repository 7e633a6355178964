//! Tiered billing calculation.
//!
//! Converts a contractor's actual working hours into a payable amount using a
//! [`PricingPolicy`]: hours inside the `[lower, upper]` band earn the flat base amount,
//! hours short of the band are deducted per hour, hours beyond it are paid per hour of
//! overtime. Zero hours always pay nothing.
//!
//! The calculation is pure. Persisting the result is the task record repository's job,
//! see [`crate::server::data::task_record::TaskRecordRepository`].

pub mod calculator;
pub mod policy;

pub use calculator::{calculate, BillingCalculator, NegativeAmountPolicy, Tier};
pub use policy::PricingPolicy;
