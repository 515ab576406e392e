//! Course and assignment records.
//!
//! # Responsibility
//! - Define the course record and the assignments it exclusively owns.
//! - Provide validation helpers shared by store writes and simulations.
//!
//! # Invariants
//! - `credit_hours` lies in `[MIN_CREDIT_HOURS, MAX_CREDIT_HOURS]`.
//! - Every assignment has `max > 0` and `0 <= earned <= max`.
//! - Validation happens at write time; stored values are not re-checked.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest accepted credit-hour value for a course.
pub const MIN_CREDIT_HOURS: f64 = 0.5;
/// Highest accepted credit-hour value for a course.
pub const MAX_CREDIT_HOURS: f64 = 6.0;

/// Store-assigned course identifier.
///
/// Allocated monotonically starting at 1 and never reused after deletion.
pub type CourseId = u32;

/// Validation failure for course/assignment numeric fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourseValidationError {
    /// Credit hours outside `[0.5, 6.0]`.
    CreditHoursOutOfRange(f64),
    /// Assignment maximum points must be strictly positive.
    NonPositiveMaxPoints(f64),
    /// Earned points cannot be negative.
    NegativeEarnedPoints(f64),
    /// Earned points cannot exceed maximum points.
    EarnedExceedsMax { earned: f64, max: f64 },
    /// NaN or infinite input for the named field.
    NonFiniteValue(&'static str),
}

impl Display for CourseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreditHoursOutOfRange(value) => write!(
                f,
                "credit hours {value} outside [{MIN_CREDIT_HOURS}, {MAX_CREDIT_HOURS}]"
            ),
            Self::NonPositiveMaxPoints(value) => {
                write!(f, "maximum points must be positive, got {value}")
            }
            Self::NegativeEarnedPoints(value) => {
                write!(f, "earned points cannot be negative, got {value}")
            }
            Self::EarnedExceedsMax { earned, max } => {
                write!(f, "earned points {earned} exceed maximum points {max}")
            }
            Self::NonFiniteValue(field) => write!(f, "{field} must be a finite number"),
        }
    }
}

impl Error for CourseValidationError {}

/// One scored unit of work inside a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub earned: f64,
    pub max: f64,
}

impl Assignment {
    /// Builds a validated assignment.
    ///
    /// # Errors
    /// - Returns `CourseValidationError` when `max <= 0`, `earned < 0`,
    ///   `earned > max`, or either value is not finite.
    pub fn new(
        name: impl Into<String>,
        earned: f64,
        max: f64,
    ) -> Result<Self, CourseValidationError> {
        validate_scores(earned, max)?;
        Ok(Self {
            name: name.into(),
            earned,
            max,
        })
    }

    /// Score as a percentage of the maximum, `earned / max * 100`.
    pub fn percentage(&self) -> f64 {
        (self.earned / self.max) * 100.0
    }

    /// Re-checks score invariants for externally constructed values.
    pub fn validate(&self) -> Result<(), CourseValidationError> {
        validate_scores(self.earned, self.max)
    }
}

/// A gradable course with its owned, ordered assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub credit_hours: f64,
    pub assignments: Vec<Assignment>,
}

impl Course {
    /// Creates a course with no assignments.
    ///
    /// The id is supplied by the owning store; this constructor does not
    /// allocate identifiers.
    pub fn new(
        id: CourseId,
        name: impl Into<String>,
        credit_hours: f64,
    ) -> Result<Self, CourseValidationError> {
        validate_credit_hours(credit_hours)?;
        Ok(Self {
            id,
            name: name.into(),
            credit_hours,
            assignments: Vec::new(),
        })
    }

    /// Returns whether the course has at least one assignment.
    pub fn is_graded(&self) -> bool {
        !self.assignments.is_empty()
    }
}

/// Checks a credit-hour value against `[0.5, 6.0]`.
pub fn validate_credit_hours(value: f64) -> Result<(), CourseValidationError> {
    if !value.is_finite() {
        return Err(CourseValidationError::NonFiniteValue("credit hours"));
    }
    if !(MIN_CREDIT_HOURS..=MAX_CREDIT_HOURS).contains(&value) {
        return Err(CourseValidationError::CreditHoursOutOfRange(value));
    }
    Ok(())
}

/// Checks an earned/max pair: `max > 0` and `0 <= earned <= max`.
pub fn validate_scores(earned: f64, max: f64) -> Result<(), CourseValidationError> {
    if !max.is_finite() {
        return Err(CourseValidationError::NonFiniteValue("max points"));
    }
    if !earned.is_finite() {
        return Err(CourseValidationError::NonFiniteValue("earned points"));
    }
    if max <= 0.0 {
        return Err(CourseValidationError::NonPositiveMaxPoints(max));
    }
    if earned < 0.0 {
        return Err(CourseValidationError::NegativeEarnedPoints(earned));
    }
    if earned > max {
        return Err(CourseValidationError::EarnedExceedsMax { earned, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_credit_hours, validate_scores, CourseValidationError};

    #[test]
    fn credit_hour_bounds_are_inclusive() {
        assert!(validate_credit_hours(0.5).is_ok());
        assert!(validate_credit_hours(6.0).is_ok());
        assert_eq!(
            validate_credit_hours(6.5),
            Err(CourseValidationError::CreditHoursOutOfRange(6.5))
        );
        assert!(validate_credit_hours(f64::NAN).is_err());
    }

    #[test]
    fn full_and_zero_scores_are_valid() {
        assert!(validate_scores(0.0, 10.0).is_ok());
        assert!(validate_scores(10.0, 10.0).is_ok());
        assert!(matches!(
            validate_scores(11.0, 10.0),
            Err(CourseValidationError::EarnedExceedsMax { .. })
        ));
        assert!(matches!(
            validate_scores(0.0, 0.0),
            Err(CourseValidationError::NonPositiveMaxPoints(_))
        ));
    }
}
