//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

mod reference_filter;

pub use reference_filter::{ReferenceFilter, DEFAULT_EXCLUDED_SUFFIXES, FOLDER_VALUES};
