//! # Roster Module
//!
//! The insertion-ordered student collection.
//!
//! The roster is append-only and lives for the process lifetime. Duplicate
//! names are permitted; records are never edited or removed. Every consumer
//! observes records in the order they were added.

use crate::Student;
use serde::{Deserialize, Serialize};

/// The in-memory student roster.
///
/// Backed by a `Vec` so iteration order is insertion order, which the
/// tie-breaking rules in [`crate::stats`] depend on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. The roster grows by exactly one.
    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
