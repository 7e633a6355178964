//! Back office for freelance contractor monthly billing.
//!
//! The crate tracks contractors, monthly billing cycles and one task record per contractor
//! per cycle. Whenever a task record is saved its payable amount is recomputed from the
//! recorded hours and the contractor's pricing policy; see [`server::billing`].

pub mod model;
pub mod server;
