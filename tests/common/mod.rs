//! Common test utilities for Breakdown CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project with a job root, a scene manifest and a
//!   private config home
//! - Fixtures: Reusable scene and config content

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
