//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! reporting core test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `backend`: Backend test helpers and tracing setup
//! - `assertions`: Custom assertion helpers for statistics types
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod backend;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use backend::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
