//! # Report Module
//!
//! Text rendering for roster output.
//!
//! The report bodies live in the core so their exact shape is unit-testable
//! without a terminal. The interactive layer owns section headers, prompts,
//! and empty-state messages; this module only ever renders populated data.

use crate::stats::GradeSummary;
use crate::Roster;

const SEPARATOR: &str = "----------------------------------------";

/// Render the full roster listing.
///
/// One line per record as `<index>. <name> - <grade>`, 1-based, in
/// insertion order, preceded by the total count.
#[must_use]
pub fn listing(roster: &Roster) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total students: {}\n", roster.len()));
    out.push_str(SEPARATOR);
    out.push('\n');
    for (i, student) in roster.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} - {}\n",
            i + 1,
            student.name(),
            student.grade()
        ));
    }
    out
}

impl GradeSummary {
    /// Format the combined statistics block.
    ///
    /// The average is rendered to two decimal places; extremes and range
    /// use the shortest exact representation.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Total students: {}\n", self.total));
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!("Average Grade: {:.2}\n", self.average));
        out.push_str(&format!(
            "Highest Grade: {} (Student: {})\n",
            self.highest.grade(),
            self.highest.name()
        ));
        out.push_str(&format!(
            "Lowest Grade: {} (Student: {})\n",
            self.lowest.grade(),
            self.lowest.name()
        ));
        out.push_str(&format!("Grade Range: {}\n", self.range));
        out
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{stats, Student};

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster.add(Student::new("Alice", 92.5).unwrap());
        roster.add(Student::new("Bob", 70.0).unwrap());
        roster.add(Student::new("Carol", 92.5).unwrap());
        roster
    }

    #[test]
    fn listing_is_indexed_in_insertion_order() {
        let text = listing(&sample_roster());
        assert!(text.contains("Total students: 3"));
        assert!(text.contains("1. Alice - 92.5"));
        assert!(text.contains("2. Bob - 70"));
        assert!(text.contains("3. Carol - 92.5"));
        let alice = text.find("1. Alice").unwrap();
        let bob = text.find("2. Bob").unwrap();
        assert!(alice < bob);
    }

    #[test]
    fn summary_text_format() {
        let s = stats::summary(&sample_roster()).unwrap();
        let text = s.to_text();
        assert!(text.contains("Average Grade: 85.00"));
        assert!(text.contains("Highest Grade: 92.5 (Student: Alice)"));
        assert!(text.contains("Lowest Grade: 70 (Student: Bob)"));
        assert!(text.contains("Grade Range: 22.5"));
    }

    #[test]
    fn summary_serializes() {
        let s = stats::summary(&sample_roster()).unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["highest"]["name"], "Alice");
        assert_eq!(json["lowest"]["name"], "Bob");
    }
}
