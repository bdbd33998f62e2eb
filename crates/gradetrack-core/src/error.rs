//! # Error Module
//!
//! The invalid-input taxonomy for roster operations.
//!
//! Nothing here is fatal: the interactive layer maps each variant to a short
//! console message and re-prompts or aborts the single operation.

use thiserror::Error;

/// Errors produced by roster construction and aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// Student name was empty (or blank after trimming).
    #[error("student name cannot be empty")]
    EmptyName,

    /// Grade input could not be parsed as a number.
    #[error("invalid grade format")]
    InvalidGradeFormat,

    /// Grade parsed but falls outside the accepted range.
    #[error("grade {grade} is outside the accepted range")]
    GradeOutOfRange {
        /// The rejected value.
        grade: f64,
    },

    /// An aggregate was requested on an empty roster.
    #[error("no students in the roster")]
    EmptyRoster,
}
