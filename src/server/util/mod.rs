//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers that don't belong to a single service, such as
//! the calendar-month normalization used to key billing cycles.

pub mod time;
