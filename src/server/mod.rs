//! Server application core modules.
//!
//! This module contains all server-side functionality for Tally, including the billing
//! calculator, database repositories, business services, HTTP controllers and routing,
//! and application configuration and startup.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod billing;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
