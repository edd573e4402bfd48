//! Core types, options, and error definitions for the dashgrid layout engine.
//!
//! This crate provides the foundational types used by the other dashgrid crates:
//! - Widget descriptors and their grid rectangles
//! - Responsive column profiles and breakpoints
//! - Engine options (breakpoints, row heights, size presets)
//! - Error types

pub mod errors;
pub mod options;
pub mod profile;
pub mod types;

pub use errors::*;
pub use options::*;
pub use profile::*;
pub use types::*;
