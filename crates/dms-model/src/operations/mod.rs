//! Request and result shapes, one pair per service operation.
//!
//! Grouped by the resource family the operation acts on. Every
//! `<Operation>Request` / `<Operation>Result` pair is re-exported flat.

mod certificates;
mod endpoints;
mod events;
mod instances;
mod subnet_groups;
mod tags;
mod tasks;

pub use certificates::*;
pub use endpoints::*;
pub use events::*;
pub use instances::*;
pub use subnet_groups::*;
pub use tags::*;
pub use tasks::*;
