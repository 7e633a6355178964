//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers and type aliases
//! for the database models generated in the `entity` crate.

pub mod app;
pub mod db;
