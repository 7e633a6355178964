//! Request and response types of the JSON API.

pub mod api;
pub mod billing;
pub mod contractor;
pub mod partner;
pub mod purchase_order;
