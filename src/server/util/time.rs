//! Calendar month utilities.
//!
//! Billing cycles are keyed by the first day of their month. These helpers normalize
//! arbitrary dates and `YYYY-MM` strings to that key.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::server::error::Error;

/// Returns the first day of the month containing `date`.
///
/// # Returns
/// - `Ok(NaiveDate)` - The first day of `date`'s month
/// - `Err(Error::InternalError)` - Day one of the month could not be constructed, which
///   cannot happen for a valid `date`
pub fn first_day_of_month(date: NaiveDate) -> Result<NaiveDate, Error> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to construct the first day of the month for {}",
            date
        ))
    })
}

/// Returns the first day of the current UTC month relative to `now`.
pub fn current_month(now: DateTime<Utc>) -> Result<NaiveDate, Error> {
    first_day_of_month(now.date_naive())
}

/// Parses a `YYYY-MM` month, also accepting a full `YYYY-MM-DD` date.
///
/// # Returns
/// - `Ok(NaiveDate)` - First day of the parsed month
/// - `Err(Error::ParseError)` - The value is not a valid month
///
/// # Example
/// ```ignore
/// assert_eq!(parse_year_month("2025-01")?, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// assert_eq!(parse_year_month("2025-01-17")?, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// ```
pub fn parse_year_month(value: &str) -> Result<NaiveDate, Error> {
    let value = value.trim();

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d"))
        .map_err(|_| Error::ParseError(format!("`{}` is not a YYYY-MM month", value)))?;

    first_day_of_month(date)
}
