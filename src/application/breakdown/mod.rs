//! Breakdown Use Case
//!
//! Scans every asset reference in the host document and dispatches the
//! commands a user can run against them: update a version, update all, and
//! delete elder or unused versions.

mod command;
mod result;
mod service;

pub use command::Command;
pub use result::{AssetStatus, Breakdown, BreakdownRow, CommandOutcome};
pub use service::BreakdownService;
