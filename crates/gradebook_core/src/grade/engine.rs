//! Course percentage and credit-weighted GPA.
//!
//! # Invariants
//! - Course percentage is the unweighted mean of assignment percentages.
//! - GPA weights grade points by credit hours over graded courses only.
//! - `overall_gpa` returns `0.0` when nothing is graded; callers must ask
//!   `has_graded_courses` to tell that apart from a real 0.0 GPA.

use crate::grade::letter::{letter_for_percentage, LetterGrade};
use crate::model::course::Course;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for grade queries that have no defined value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeError {
    /// The course has no assignments, so it has no percentage.
    NotAvailable,
}

impl Display for GradeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "course has no assignments yet"),
        }
    }
}

impl Error for GradeError {}

/// Percentage paired with its letter band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    pub percentage: f64,
    pub letter: LetterGrade,
}

impl Display for CourseGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}% ({})", self.percentage, self.letter)
    }
}

/// Mean of per-assignment percentages.
///
/// # Errors
/// - `GradeError::NotAvailable` when the course has no assignments.
pub fn course_percentage(course: &Course) -> Result<f64, GradeError> {
    if course.assignments.is_empty() {
        return Err(GradeError::NotAvailable);
    }
    let sum: f64 = course.assignments.iter().map(|a| a.percentage()).sum();
    Ok(sum / course.assignments.len() as f64)
}

/// Percentage and letter, or `None` for an ungraded course.
pub fn course_grade(course: &Course) -> Option<CourseGrade> {
    let percentage = course_percentage(course).ok()?;
    Some(CourseGrade {
        percentage,
        letter: letter_for_percentage(percentage),
    })
}

pub fn has_graded_courses(courses: &[Course]) -> bool {
    courses.iter().any(Course::is_graded)
}

/// Credit-hour-weighted GPA over courses with at least one assignment.
pub fn overall_gpa(courses: &[Course]) -> f64 {
    let mut quality_points = 0.0;
    let mut credits = 0.0;

    for course in courses {
        let Some(grade) = course_grade(course) else {
            continue;
        };
        quality_points += grade.letter.grade_points() * course.credit_hours;
        credits += course.credit_hours;
    }

    if credits == 0.0 {
        return 0.0;
    }
    quality_points / credits
}
