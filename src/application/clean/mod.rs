//! Clean Use Case
//!
//! Deletes the files a cleanup plan selected.
//!
//! This module handles:
//! - Filtering the plan down to files that exist
//! - Asking for confirmation before touching the disk
//! - Deleting each file independently, recording per-file failures

mod executor;
mod options;
mod result;

pub use executor::DeletionExecutor;
pub use options::DeleteOptions;
pub use result::{DeletionOutcome, DeletionReport};
