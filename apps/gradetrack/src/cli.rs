//! # CLI Module
//!
//! The interactive menu loop and its command handlers.
//!
//! Every function is generic over `BufRead`/`Write` so the whole session can
//! be driven from integration tests with in-memory buffers. Invalid input is
//! never fatal: the handler prints a short message and either re-prompts
//! (menu choice) or aborts the single operation (add).
//!
//! End of input is treated as choosing Exit, so a closed stdin cannot spin
//! the prompt loop.

use gradetrack_core::{parse_grade, report, stats, Roster, RosterError, Student};
use std::io::{self, BufRead, Write};

const MENU_SEPARATOR: &str = "----------------------------------------";

// =============================================================================
// MENU CHOICE
// =============================================================================

/// The seven fixed menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ListStudents,
    AverageGrade,
    HighestGrade,
    LowestGrade,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// Parse one line of menu input.
    ///
    /// Empty input, non-numeric input, and values outside 1-7 are all
    /// rejected the same way: `None`, which the prompt loop reports as
    /// "Input is invalid".
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::AddStudent),
            2 => Some(Self::ListStudents),
            3 => Some(Self::AverageGrade),
            4 => Some(Self::HighestGrade),
            5 => Some(Self::LowestGrade),
            6 => Some(Self::Statistics),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

// =============================================================================
// INPUT HELPERS
// =============================================================================

/// Read one line, without its trailing newline.
///
/// Returns `Ok(None)` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt for a menu choice until a valid one arrives.
///
/// End of input yields [`MenuChoice::Exit`].
fn read_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<MenuChoice> {
    loop {
        write!(out, "Enter your choice (1-7): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(MenuChoice::Exit);
        };
        match MenuChoice::parse(&line) {
            Some(choice) => return Ok(choice),
            None => {
                tracing::debug!(input = %line, "invalid menu choice");
                writeln!(out, "Input is invalid")?;
            }
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Student Grade Tracker Menu ===")?;
    writeln!(out, "1. Add Student")?;
    writeln!(out, "2. Display All Students")?;
    writeln!(out, "3. Show Average Grade")?;
    writeln!(out, "4. Show Highest Grade")?;
    writeln!(out, "5. Show Lowest Grade")?;
    writeln!(out, "6. Show Grade Statistics")?;
    writeln!(out, "7. Exit")?;
    writeln!(out, "{MENU_SEPARATOR}")?;
    Ok(())
}

// =============================================================================
// COMMAND HANDLERS
// =============================================================================

/// Prompt for a name and grade, validate, and append to the roster.
///
/// Any rejection aborts the operation and leaves the roster unchanged.
pub fn cmd_add<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Add New Student ===")?;

    write!(out, "Enter student name: ")?;
    out.flush()?;
    let Some(name) = read_line(input)? else {
        return Ok(());
    };
    if name.trim().is_empty() {
        tracing::debug!("add rejected: empty name");
        writeln!(out, "Error: Student name cannot be empty.")?;
        return Ok(());
    }

    write!(out, "Enter student grade (0.0 - 100.0): ")?;
    out.flush()?;
    let Some(grade_input) = read_line(input)? else {
        return Ok(());
    };
    let grade = match parse_grade(&grade_input) {
        Ok(grade) => grade,
        Err(RosterError::InvalidGradeFormat) => {
            tracing::debug!(input = %grade_input, "add rejected: unparsable grade");
            writeln!(out, "Error: Invalid grade format. Please enter a valid number.")?;
            return Ok(());
        }
        Err(err) => {
            tracing::debug!(%err, "add rejected: grade out of range");
            writeln!(out, "Error: Grade must be between 0.0 and 100.0.")?;
            return Ok(());
        }
    };

    match Student::new(name, grade) {
        Ok(student) => {
            tracing::info!(name = %student.name(), grade = student.grade(), "student added");
            writeln!(
                out,
                "Student '{}' with grade {} added successfully!",
                student.name(),
                student.grade()
            )?;
            roster.add(student);
        }
        Err(err) => {
            writeln!(out, "Error: {err}.")?;
        }
    }
    Ok(())
}

/// Print every record in insertion order.
pub fn cmd_list<W: Write>(roster: &Roster, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== All Students ===")?;
    if roster.is_empty() {
        writeln!(out, "No students found. Please add some students first.")?;
        return Ok(());
    }
    write!(out, "{}", report::listing(roster))?;
    Ok(())
}

/// Print the mean grade to two decimal places.
pub fn cmd_average<W: Write>(roster: &Roster, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Average Grade ===")?;
    match stats::average(roster) {
        Ok(average) => {
            writeln!(out, "Average grade: {average:.2}")?;
            writeln!(out, "Total students: {}", roster.len())?;
        }
        Err(_) => {
            writeln!(out, "No students found. Cannot calculate average.")?;
        }
    }
    Ok(())
}

/// Print the first record holding the maximal grade.
pub fn cmd_highest<W: Write>(roster: &Roster, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Highest Grade ===")?;
    match stats::highest(roster) {
        Ok(student) => {
            writeln!(out, "Highest grade: {}", student.grade())?;
            writeln!(out, "Student: {}", student.name())?;
        }
        Err(_) => {
            writeln!(out, "No students found. Cannot find highest grade.")?;
        }
    }
    Ok(())
}

/// Print the first record holding the minimal grade.
pub fn cmd_lowest<W: Write>(roster: &Roster, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Lowest Grade ===")?;
    match stats::lowest(roster) {
        Ok(student) => {
            writeln!(out, "Lowest grade: {}", student.grade())?;
            writeln!(out, "Student: {}", student.name())?;
        }
        Err(_) => {
            writeln!(out, "No students found. Cannot find lowest grade.")?;
        }
    }
    Ok(())
}

/// Print the combined statistics block.
pub fn cmd_statistics<W: Write>(roster: &Roster, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Grade Statistics ===")?;
    match stats::summary(roster) {
        Ok(summary) => {
            write!(out, "{}", summary.to_text())?;
        }
        Err(_) => {
            writeln!(out, "No students found. Cannot show statistics.")?;
        }
    }
    Ok(())
}

// =============================================================================
// MENU LOOP
// =============================================================================

/// Run the interactive session until Exit (or end of input).
///
/// The only error that escapes is a terminal I/O failure; every invalid
/// user input is handled in place.
pub fn run<R: BufRead, W: Write>(
    roster: &mut Roster,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "=== Welcome to Student Grade Tracker ===")?;

    loop {
        print_menu(out)?;
        let choice = read_choice(input, out)?;
        tracing::debug!(?choice, "menu dispatch");

        match choice {
            MenuChoice::AddStudent => cmd_add(roster, input, out)?,
            MenuChoice::ListStudents => cmd_list(roster, out)?,
            MenuChoice::AverageGrade => cmd_average(roster, out)?,
            MenuChoice::HighestGrade => cmd_highest(roster, out)?,
            MenuChoice::LowestGrade => cmd_lowest(roster, out)?,
            MenuChoice::Statistics => cmd_statistics(roster, out)?,
            MenuChoice::Exit => {
                writeln!(out, "Thank you for using Student Grade Tracker!")?;
                return Ok(());
            }
        }

        writeln!(out)?;
        writeln!(out, "Press Enter to continue...")?;
        // Acknowledgment line is discarded; EOF here surfaces at the next prompt.
        let _ = read_line(input)?;
    }
}

// =============================================================================
// TESTS
// =============================================================================
