//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the service with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates the service with proper dependencies (dependency injection)
//! - `output` - Table, summary and NDJSON rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{CleanKind, Cli, Commands};
pub use factory::create_breakdown_service;
