//! Shared configuration plumbing for the RFM workspace:
//!
//! - Typed YAML configuration with per-section defaults
//! - `!include` resolution for layered config files
//! - Test helpers for writing throwaway config trees

pub mod config;
pub mod yaml_include;

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{config_path, write_config_tree};
