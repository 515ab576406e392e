//! Course repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/find/edit/delete APIs over an ordered course sequence.
//! - Allocate course ids from a per-store monotonic counter.
//!
//! # Invariants
//! - Course order is insertion order; it is never sorted.
//! - Ids start at 1 and are never reused, even after deletion.
//! - Mutation is only reachable through `CourseId` (+ assignment index);
//!   no long-lived mutable references into the sequence escape.

use crate::model::course::{
    validate_credit_hours, validate_scores, Assignment, Course, CourseId, CourseValidationError,
};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for course and assignment operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoError {
    Validation(CourseValidationError),
    CourseNotFound(CourseId),
    AssignmentNotFound { course_id: CourseId, index: usize },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::CourseNotFound(id) => write!(f, "course not found: {id}"),
            Self::AssignmentNotFound { course_id, index } => {
                write!(f, "assignment {index} not found in course {course_id}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::CourseNotFound(_) => None,
            Self::AssignmentNotFound { .. } => None,
        }
    }
}

impl From<CourseValidationError> for RepoError {
    fn from(value: CourseValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Result of a rename request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// Empty new name; the stored name was kept.
    Unchanged,
}

/// Replacement values for one stored assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentEdit {
    /// `None` or an empty string keeps the current name.
    pub name: Option<String>,
    pub earned: f64,
    pub max: f64,
}

/// Repository interface for course/assignment operations.
pub trait CourseRepository {
    fn add_course(&mut self, name: &str, credit_hours: f64) -> RepoResult<CourseId>;
    fn find_index(&self, id: CourseId) -> Option<usize>;
    fn get_course(&self, id: CourseId) -> Option<&Course>;
    fn list_courses(&self) -> &[Course];
    fn add_assignment(&mut self, id: CourseId, assignment: Assignment) -> RepoResult<()>;
    fn rename_course(&mut self, id: CourseId, new_name: &str) -> RepoResult<RenameOutcome>;
    fn set_credit_hours(&mut self, id: CourseId, credit_hours: f64) -> RepoResult<()>;
    fn edit_assignment(
        &mut self,
        id: CourseId,
        index: usize,
        edit: AssignmentEdit,
    ) -> RepoResult<()>;
    fn delete_assignment(&mut self, id: CourseId, index: usize) -> RepoResult<Assignment>;
    fn delete_course(&mut self, id: CourseId) -> RepoResult<Course>;
}

/// Session-scoped course store backed by a `Vec`.
///
/// Cloning yields a fully independent deep copy, including the id counter.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryCourseRepository {
    courses: Vec<Course>,
    next_id: CourseId,
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            next_id: 1,
        }
    }

    /// Id the next `add_course` call will assign.
    pub fn next_id(&self) -> CourseId {
        self.next_id
    }

    fn course_mut(&mut self, id: CourseId) -> RepoResult<&mut Course> {
        let index = self.find_index(id).ok_or(RepoError::CourseNotFound(id))?;
        Ok(&mut self.courses[index])
    }
}

impl CourseRepository for InMemoryCourseRepository {
    fn add_course(&mut self, name: &str, credit_hours: f64) -> RepoResult<CourseId> {
        let course = Course::new(self.next_id, name, credit_hours)?;
        let id = course.id;
        self.next_id += 1;
        self.courses.push(course);
        Ok(id)
    }

    fn find_index(&self, id: CourseId) -> Option<usize> {
        self.courses.iter().position(|course| course.id == id)
    }

    fn get_course(&self, id: CourseId) -> Option<&Course> {
        self.find_index(id).map(|index| &self.courses[index])
    }

    fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    fn add_assignment(&mut self, id: CourseId, assignment: Assignment) -> RepoResult<()> {
        assignment.validate()?;
        self.course_mut(id)?.assignments.push(assignment);
        Ok(())
    }

    fn rename_course(&mut self, id: CourseId, new_name: &str) -> RepoResult<RenameOutcome> {
        let course = self.course_mut(id)?;
        if new_name.is_empty() {
            return Ok(RenameOutcome::Unchanged);
        }
        course.name = new_name.to_string();
        Ok(RenameOutcome::Renamed)
    }

    fn set_credit_hours(&mut self, id: CourseId, credit_hours: f64) -> RepoResult<()> {
        validate_credit_hours(credit_hours)?;
        self.course_mut(id)?.credit_hours = credit_hours;
        Ok(())
    }

    fn edit_assignment(
        &mut self,
        id: CourseId,
        index: usize,
        edit: AssignmentEdit,
    ) -> RepoResult<()> {
        validate_scores(edit.earned, edit.max)?;
        let course = self.course_mut(id)?;
        let Some(assignment) = course.assignments.get_mut(index) else {
            return Err(RepoError::AssignmentNotFound {
                course_id: id,
                index,
            });
        };

        if let Some(name) = edit.name.filter(|name| !name.is_empty()) {
            assignment.name = name;
        }
        assignment.earned = edit.earned;
        assignment.max = edit.max;
        Ok(())
    }

    fn delete_assignment(&mut self, id: CourseId, index: usize) -> RepoResult<Assignment> {
        let course = self.course_mut(id)?;
        if index >= course.assignments.len() {
            return Err(RepoError::AssignmentNotFound {
                course_id: id,
                index,
            });
        }
        Ok(course.assignments.remove(index))
    }

    fn delete_course(&mut self, id: CourseId) -> RepoResult<Course> {
        let index = self.find_index(id).ok_or(RepoError::CourseNotFound(id))?;
        Ok(self.courses.remove(index))
    }
}
