//! Non-persisting "what-if" simulation.
//!
//! # Responsibility
//! - Project course average and GPA as if one more assignment existed.
//!
//! # Invariants
//! - The caller's courses are only read. The hypothetical assignment is
//!   appended to a deep copy, which is dropped before returning.
//! - Same inputs against an unchanged store always give the same outcome.

use crate::grade::engine::{course_grade, course_percentage, overall_gpa, CourseGrade, GradeError};
use crate::grade::letter::letter_for_percentage;
use crate::model::course::{Assignment, Course, CourseId, CourseValidationError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Simulation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum WhatIfError {
    CourseNotFound(CourseId),
    Validation(CourseValidationError),
    Grade(GradeError),
}

impl Display for WhatIfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CourseNotFound(id) => write!(f, "course not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Grade(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WhatIfError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Grade(err) => Some(err),
            Self::CourseNotFound(_) => None,
        }
    }
}

impl From<GradeError> for WhatIfError {
    fn from(value: GradeError) -> Self {
        Self::Grade(value)
    }
}

impl From<CourseValidationError> for WhatIfError {
    fn from(value: CourseValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Before/after comparison for one hypothetical assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfOutcome {
    pub course_id: CourseId,
    /// `None` when the course had no assignments before the simulation.
    pub before: Option<CourseGrade>,
    pub after: CourseGrade,
    pub gpa_before: f64,
    pub gpa_after: f64,
}

/// Simulates adding `hypothetical` to course `course_id`.
///
/// # Errors
/// - `WhatIfError::Validation` when the hypothetical scores break the
///   assignment invariants.
/// - `WhatIfError::CourseNotFound` when no course has `course_id`.
pub fn simulate(
    courses: &[Course],
    course_id: CourseId,
    hypothetical: Assignment,
) -> Result<WhatIfOutcome, WhatIfError> {
    hypothetical.validate()?;
    let index = courses
        .iter()
        .position(|course| course.id == course_id)
        .ok_or(WhatIfError::CourseNotFound(course_id))?;

    let before = course_grade(&courses[index]);
    let gpa_before = overall_gpa(courses);

    let mut scenario = courses.to_vec();
    scenario[index].assignments.push(hypothetical);

    let percentage = course_percentage(&scenario[index])?;
    let after = CourseGrade {
        percentage,
        letter: letter_for_percentage(percentage),
    };
    let gpa_after = overall_gpa(&scenario);

    Ok(WhatIfOutcome {
        course_id,
        before,
        after,
        gpa_before,
        gpa_after,
    })
}
