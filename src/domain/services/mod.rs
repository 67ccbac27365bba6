//! Domain Services
//!
//! Business logic services that operate on domain entities.
//! I/O only happens through ports passed in by the caller.

mod discovery;
mod planner;

pub use discovery::VersionDiscovery;
pub use planner::{CleanupPlan, CleanupPlanner};
