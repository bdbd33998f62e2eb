//! # Gradetrack Library
//!
//! This library exposes the interactive menu modules for testing and
//! integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export gradetrack_core for convenience
pub use gradetrack_core;
