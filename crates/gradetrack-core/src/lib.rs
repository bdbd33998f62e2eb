//! # Gradetrack Core
//!
//! The deterministic roster engine for Gradetrack - THE LOGIC.
//!
//! This crate holds the in-memory student roster and the aggregate
//! computations over it (average, highest, lowest, range). It is pure and
//! synchronous: no I/O, no logging, no terminal knowledge. The binary in
//! `apps/gradetrack` layers the interactive menu on top.
//!
//! ## Design Principles
//!
//! - Insertion-ordered `Vec` storage; every aggregate is a single linear scan
//! - Records are immutable once constructed (no edit/delete operations)
//! - All fallible operations return `Result` with [`RosterError`]

pub mod error;
pub mod report;
pub mod roster;
pub mod stats;

pub use error::RosterError;
pub use roster::Roster;
pub use stats::GradeSummary;

use serde::{Deserialize, Serialize};

/// Lowest grade accepted by validation.
pub const GRADE_MIN: f64 = 0.0;

/// Highest grade accepted by validation.
pub const GRADE_MAX: f64 = 100.0;

// =============================================================================
// STUDENT RECORD
// =============================================================================

/// One student entry: a name and a numeric grade.
///
/// Construction is the validation boundary: a `Student` that exists always
/// has a non-blank name and a grade within `[GRADE_MIN, GRADE_MAX]`.
/// Records are immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    grade: f64,
}

impl Student {
    /// Create a validated student record.
    ///
    /// The name is trimmed; a name that is empty after trimming is rejected.
    /// Grades outside `[GRADE_MIN, GRADE_MAX]` are rejected. The range check
    /// also rejects NaN, since NaN is contained in no range.
    pub fn new(name: impl Into<String>, grade: f64) -> Result<Self, RosterError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
            return Err(RosterError::GradeOutOfRange { grade });
        }
        Ok(Self { name, grade })
    }

    /// The student's name (trimmed, never empty).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The student's grade, within `[GRADE_MIN, GRADE_MAX]`.
    #[must_use]
    pub fn grade(&self) -> f64 {
        self.grade
    }
}

/// Parse a grade from user input.
///
/// Distinguishes the two failure modes the caller reports differently:
/// input that is not a number at all ([`RosterError::InvalidGradeFormat`])
/// versus a number outside the accepted range
/// ([`RosterError::GradeOutOfRange`]).
pub fn parse_grade(input: &str) -> Result<f64, RosterError> {
    let grade: f64 = input
        .trim()
        .parse()
        .map_err(|_| RosterError::InvalidGradeFormat)?;
    if !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
        return Err(RosterError::GradeOutOfRange { grade });
    }
    Ok(grade)
}

// =============================================================================
// TESTS
// =============================================================================
