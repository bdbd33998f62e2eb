//! # Statistics Module
//!
//! Aggregate computations over the roster.
//!
//! Every operation is a single linear scan in insertion order. Extremal
//! scans use strict comparisons, so ties resolve to the first record
//! encountered. All operations are undefined on an empty roster and return
//! [`RosterError::EmptyRoster`].

use crate::{Roster, RosterError, Student};
use serde::Serialize;

/// Mean of all grades.
pub fn average(roster: &Roster) -> Result<f64, RosterError> {
    if roster.is_empty() {
        return Err(RosterError::EmptyRoster);
    }
    let mut total = 0.0;
    for student in roster.iter() {
        total += student.grade();
    }
    Ok(total / roster.len() as f64)
}

/// The record with the highest grade.
///
/// Strict `>` comparison: the first of several tied records wins.
pub fn highest(roster: &Roster) -> Result<&Student, RosterError> {
    let mut best = roster.students().first().ok_or(RosterError::EmptyRoster)?;
    for student in roster.iter() {
        if student.grade() > best.grade() {
            best = student;
        }
    }
    Ok(best)
}

/// The record with the lowest grade.
///
/// Strict `<` comparison: the first of several tied records wins.
pub fn lowest(roster: &Roster) -> Result<&Student, RosterError> {
    let mut worst = roster.students().first().ok_or(RosterError::EmptyRoster)?;
    for student in roster.iter() {
        if student.grade() < worst.grade() {
            worst = student;
        }
    }
    Ok(worst)
}

// =============================================================================
// COMBINED SUMMARY
// =============================================================================

/// The combined statistics report: average, extremes, and range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeSummary {
    /// Number of records the summary covers.
    pub total: usize,
    /// Mean grade.
    pub average: f64,
    /// First record holding the maximal grade.
    pub highest: Student,
    /// First record holding the minimal grade.
    pub lowest: Student,
    /// Highest grade minus lowest grade.
    pub range: f64,
}

/// Compute the full summary in one pass over the roster.
pub fn summary(roster: &Roster) -> Result<GradeSummary, RosterError> {
    let first = roster.students().first().ok_or(RosterError::EmptyRoster)?;

    let mut total_grade = 0.0;
    let mut highest = first;
    let mut lowest = first;

    for student in roster.iter() {
        total_grade += student.grade();
        if student.grade() > highest.grade() {
            highest = student;
        }
        if student.grade() < lowest.grade() {
            lowest = student;
        }
    }

    Ok(GradeSummary {
        total: roster.len(),
        average: total_grade / roster.len() as f64,
        highest: highest.clone(),
        lowest: lowest.clone(),
        range: highest.grade() - lowest.grade(),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn roster_of(entries: &[(&str, f64)]) -> Roster {
        let mut roster = Roster::new();
        for (name, grade) in entries {
            roster.add(Student::new(*name, *grade).unwrap());
        }
        roster
    }

    #[test]
    fn average_of_known_grades() {
        let roster = roster_of(&[("X", 70.0), ("Y", 80.0), ("Z", 90.0)]);
        let avg = average(&roster).unwrap();
        assert!((avg - 80.0).abs() < 1e-9);
        assert_eq!(format!("{avg:.2}"), "80.00");
    }

    #[test]
    fn aggregates_reject_empty_roster() {
        let roster = Roster::new();
        assert_eq!(average(&roster), Err(RosterError::EmptyRoster));
        assert_eq!(highest(&roster).unwrap_err(), RosterError::EmptyRoster);
        assert_eq!(lowest(&roster).unwrap_err(), RosterError::EmptyRoster);
        assert_eq!(summary(&roster).unwrap_err(), RosterError::EmptyRoster);
    }

    #[test]
    fn ties_resolve_to_first_in_insertion_order() {
        let roster = roster_of(&[("A", 90.0), ("B", 70.0), ("C", 90.0)]);
        assert_eq!(highest(&roster).unwrap().name(), "A");
        assert_eq!(lowest(&roster).unwrap().name(), "B");
    }

    #[test]
    fn range_is_highest_minus_lowest() {
        let roster = roster_of(&[("A", 90.0), ("B", 70.0), ("C", 90.0)]);
        let s = summary(&roster).unwrap();
        assert_eq!(s.range, 20.0);
        assert_eq!(s.total, 3);
    }

    #[test]
    fn summary_matches_individual_aggregates() {
        let roster = roster_of(&[("A", 55.5), ("B", 82.25), ("C", 13.0), ("D", 82.25)]);
        let s = summary(&roster).unwrap();
        assert_eq!(s.average, average(&roster).unwrap());
        assert_eq!(&s.highest, highest(&roster).unwrap());
        assert_eq!(&s.lowest, lowest(&roster).unwrap());
    }

    #[test]
    fn single_record_summary() {
        let roster = roster_of(&[("Solo", 64.0)]);
        let s = summary(&roster).unwrap();
        assert_eq!(s.average, 64.0);
        assert_eq!(s.highest.name(), "Solo");
        assert_eq!(s.lowest.name(), "Solo");
        assert_eq!(s.range, 0.0);
    }

    proptest! {
        #[test]
        fn average_lies_within_extremes(
            grades in prop::collection::vec(0.0f64..=100.0, 1..50)
        ) {
            let mut roster = Roster::new();
            for (i, g) in grades.iter().enumerate() {
                roster.add(Student::new(format!("s{i}"), *g).unwrap());
            }
            let avg = average(&roster).unwrap();
            let hi = highest(&roster).unwrap().grade();
            let lo = lowest(&roster).unwrap().grade();
            prop_assert!(lo <= hi);
            prop_assert!(avg >= lo - 1e-9);
            prop_assert!(avg <= hi + 1e-9);
        }

        #[test]
        fn range_is_never_negative(
            grades in prop::collection::vec(0.0f64..=100.0, 1..50)
        ) {
            let mut roster = Roster::new();
            for (i, g) in grades.iter().enumerate() {
                roster.add(Student::new(format!("s{i}"), *g).unwrap());
            }
            let s = summary(&roster).unwrap();
            prop_assert!(s.range >= 0.0);
            prop_assert_eq!(s.range, s.highest.grade() - s.lowest.grade());
        }

        #[test]
        fn roster_len_equals_successful_adds(
            grades in prop::collection::vec(-50.0f64..150.0, 0..50)
        ) {
            let mut roster = Roster::new();
            let mut accepted = 0usize;
            for (i, g) in grades.iter().enumerate() {
                if let Ok(student) = Student::new(format!("s{i}"), *g) {
                    roster.add(student);
                    accepted += 1;
                }
            }
            prop_assert_eq!(roster.len(), accepted);
        }
    }
}
