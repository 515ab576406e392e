//! Text rendering for course tables and grade reports.

use crate::grade::distribution::GradeDistribution;
use crate::grade::engine::course_grade;
use crate::grade::letter::LetterGrade;
use crate::model::course::Course;
use crate::service::what_if::WhatIfOutcome;
use std::io::{self, Write};

const RULE: &str = "==========================================";
const WIDE_RULE: &str = "====================================================";
const TABLE_RULE: &str = "----------------------------------------------------";
const SUMMARY_RULE: &str = "------------------------------------------------------------";
const NO_PRIOR_AVERAGE: &str = "N/A (no assignments before what-if)";

/// One summary row per course, or a placeholder when empty.
pub fn write_course_summary(out: &mut impl Write, courses: &[Course]) -> io::Result<()> {
    if courses.is_empty() {
        return writeln!(out, "No courses have been added yet.");
    }

    writeln!(out, "Courses summary:")?;
    writeln!(out, "{SUMMARY_RULE}")?;
    for course in courses {
        write!(out, "ID: {} | Name: {}", course.id, course.name)?;
        write!(out, " | Credits: {}", course.credit_hours)?;
        match course_grade(course) {
            Some(grade) => writeln!(out, " | Grade: {grade}")?,
            None => writeln!(out, " | Grade: N/A (no assignments yet)")?,
        }
    }
    writeln!(out, "{SUMMARY_RULE}")
}

/// Assignment table with per-row percentages and the course average.
pub fn write_course_details(out: &mut impl Write, course: &Course) -> io::Result<()> {
    writeln!(out, "{WIDE_RULE}")?;
    write!(out, "Course details for: {}", course.name)?;
    writeln!(out, " (ID {})", course.id)?;
    writeln!(out, "Credit hours: {}", course.credit_hours)?;

    match course_grade(course) {
        None => writeln!(out, "No assignments have been added to this course yet.")?,
        Some(grade) => {
            write_table_row(out, ["Name", "Earned", "Max", "Percent"])?;
            writeln!(out, "{TABLE_RULE}")?;
            for assignment in &course.assignments {
                let earned = assignment.earned.to_string();
                let max = assignment.max.to_string();
                let percent = format!("{:.2}", assignment.percentage());
                write_table_row(out, [&assignment.name, &earned, &max, &percent])?;
            }
            writeln!(out, "{TABLE_RULE}")?;
            writeln!(out, "Course average: {grade}")?;
        }
    }
    writeln!(out, "{WIDE_RULE}")
}

fn write_table_row(out: &mut impl Write, cells: [&str; 4]) -> io::Result<()> {
    let [name, earned, max, percent] = cells;
    writeln!(out, "{name:<25}{earned:<15}{max:<15}{percent:<15}")
}

/// Numbered assignment list, starting at 1.
pub fn write_assignment_list(out: &mut impl Write, course: &Course) -> io::Result<()> {
    writeln!(out, "Assignments for course: {}", course.name)?;
    for (position, assignment) in course.assignments.iter().enumerate() {
        write!(out, "{}. {}", position + 1, assignment.name)?;
        writeln!(out, " (earned {} / {})", assignment.earned, assignment.max)?;
    }
    Ok(())
}

pub fn write_overall_gpa(out: &mut impl Write, gpa: f64) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Overall GPA (4.0 scale): {gpa:.2}")?;
    writeln!(out, "{RULE}")
}

pub fn write_distribution(
    out: &mut impl Write,
    distribution: &GradeDistribution,
) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "         GRADE DISTRIBUTION REPORT")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Total graded courses: {}", distribution.total())?;
    for letter in LetterGrade::ALL {
        writeln!(out, "{letter}: {}", distribution.count(letter))?;
    }
    writeln!(out, "{RULE}")
}

/// Before/after block for a completed what-if simulation.
pub fn write_what_if_result(
    out: &mut impl Write,
    course: &Course,
    outcome: &WhatIfOutcome,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "------------------------------------------")?;
    writeln!(out, "RESULTS OF WHAT-IF SCENARIO")?;
    writeln!(out, "Course: {}", course.name)?;
    writeln!(out)?;
    match &outcome.before {
        Some(grade) => writeln!(out, "Old course average: {grade}")?,
        None => writeln!(out, "Old course average: {NO_PRIOR_AVERAGE}")?,
    }
    let after = outcome.after;
    writeln!(
        out,
        "New course average WITH hypothetical assignment: {after}"
    )?;
    writeln!(out)?;
    let (gpa_before, gpa_after) = (outcome.gpa_before, outcome.gpa_after);
    writeln!(out, "Old overall GPA: {gpa_before:.2}")?;
    writeln!(
        out,
        "New overall GPA WITH hypothetical assignment: {gpa_after:.2}"
    )?;
    writeln!(out, "------------------------------------------")?;
    writeln!(out, "Remember: This change was NOT saved.")?;
    writeln!(out, "It is only a simulation to help you plan.")?;
    writeln!(out, "------------------------------------------")
}

#[cfg(test)]
mod tests {
    use super::write_course_summary;
    use crate::model::course::{Assignment, Course};

    #[test]
    fn summary_marks_ungraded_courses() {
        let mut graded = Course::new(1, "MATH 2413", 4.0).unwrap();
        graded
            .assignments
            .push(Assignment::new("Quiz", 17.0, 20.0).unwrap());
        let ungraded = Course::new(2, "HIST 1301", 3.0).unwrap();

        let mut out = Vec::new();
        write_course_summary(&mut out, &[graded, ungraded]).unwrap();
        let text = String::from_utf8(out).unwrap();

        let rows: Vec<&str> = text.lines().filter(|row| row.starts_with("ID:")).collect();
        assert_eq!(
            rows,
            vec![
                "ID: 1 | Name: MATH 2413 | Credits: 4 | Grade: 85.00% (B)",
                "ID: 2 | Name: HIST 1301 | Credits: 3 | Grade: N/A (no assignments yet)",
            ]
        );
    }
}
