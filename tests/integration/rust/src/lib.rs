//! Integration test suite for realtype
//!
//! This crate provides integration tests that verify components work
//! together correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use assert_reporter;
    pub use core_types;
    pub use realtype_cli;
    pub use type_classifier;
}
