//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BreakdownService` - Scan the document, update references, plan cleanups
//! - `DeletionExecutor` - Confirm and delete the files of a cleanup plan

pub mod breakdown;
pub mod clean;

pub use breakdown::{
    AssetStatus, Breakdown, BreakdownRow, BreakdownService, Command, CommandOutcome,
};
pub use clean::{DeleteOptions, DeletionExecutor, DeletionOutcome, DeletionReport};
