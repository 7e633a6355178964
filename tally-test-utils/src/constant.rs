//! Standard pricing policy values used across tests.
//!
//! Mock contractors and partners are created with this policy unless a test
//! supplies its own. The numbers match a typical monthly contract: a flat fee
//! for 140 to 180 hours with per-hour deduction below and overtime above.

/// Monthly flat fee for the standard policy.
pub static TEST_BASE_AMOUNT: i64 = 500_000;

/// Lower bound of the flat-fee hour band.
pub static TEST_LOWER_HOURS: f64 = 140.0;

/// Upper bound of the flat-fee hour band.
pub static TEST_UPPER_HOURS: f64 = 180.0;

/// Deduction per hour short of the lower bound.
pub static TEST_DEDUCTION_RATE: i64 = 3_000;

/// Overtime per hour above the upper bound.
pub static TEST_OVERTIME_RATE: i64 = 4_000;
