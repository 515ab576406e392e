//! Gradebook use-case service.
//!
//! # Responsibility
//! - Provide record store mutators and grade queries to the console layer.
//! - Emit one metadata-only log event per mutation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Grade queries and simulations never mutate the repository.
//! - Log events carry ids, indices and counts only, never user text.

use crate::grade::distribution::{grade_distribution, GradeDistribution};
use crate::grade::engine::{course_grade, has_graded_courses, overall_gpa, CourseGrade};
use crate::model::course::{Assignment, Course, CourseId};
use crate::repo::course_repo::{AssignmentEdit, CourseRepository, RenameOutcome, RepoResult};
use crate::service::what_if::{simulate, WhatIfError, WhatIfOutcome};
use log::{info, warn};

/// Service facade over a course repository.
pub struct GradebookService<R: CourseRepository> {
    repo: R,
}

impl<R: CourseRepository> GradebookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read-only access to the backing repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn courses(&self) -> &[Course] {
        self.repo.list_courses()
    }

    pub fn get_course(&self, id: CourseId) -> Option<&Course> {
        self.repo.get_course(id)
    }

    /// Adds a course and returns its newly allocated id.
    pub fn add_course(&mut self, name: &str, credit_hours: f64) -> RepoResult<CourseId> {
        let result = self.repo.add_course(name, credit_hours);
        match &result {
            Ok(id) => info!("event=course_add module=service status=ok course_id={id}"),
            Err(err) => warn!("event=course_add module=service status=error error={err}"),
        }
        result
    }

    /// Appends a validated assignment to a course.
    pub fn add_assignment(
        &mut self,
        course_id: CourseId,
        name: &str,
        earned: f64,
        max: f64,
    ) -> RepoResult<()> {
        let assignment = Assignment::new(name, earned, max)?;
        self.repo.add_assignment(course_id, assignment)?;
        let count = self
            .repo
            .get_course(course_id)
            .map_or(0, |course| course.assignments.len());
        info!(
            "event=assignment_add module=service status=ok course_id={course_id} assignments={}",
            count
        );
        Ok(())
    }

    /// Renames a course. An empty name is a no-op, not an error.
    pub fn rename_course(
        &mut self,
        course_id: CourseId,
        new_name: &str,
    ) -> RepoResult<RenameOutcome> {
        let outcome = self.repo.rename_course(course_id, new_name)?;
        info!(
            "event=course_rename module=service status=ok course_id={course_id} changed={}",
            outcome == RenameOutcome::Renamed
        );
        Ok(outcome)
    }

    pub fn set_credit_hours(&mut self, course_id: CourseId, credit_hours: f64) -> RepoResult<()> {
        self.repo.set_credit_hours(course_id, credit_hours)?;
        info!("event=course_credit_hours module=service status=ok course_id={course_id}");
        Ok(())
    }

    /// Replaces scores (and optionally the name) of one assignment.
    pub fn edit_assignment(
        &mut self,
        course_id: CourseId,
        index: usize,
        edit: AssignmentEdit,
    ) -> RepoResult<()> {
        self.repo.edit_assignment(course_id, index, edit)?;
        info!("event=assignment_edit module=service status=ok course_id={course_id} index={index}");
        Ok(())
    }

    pub fn delete_assignment(
        &mut self,
        course_id: CourseId,
        index: usize,
    ) -> RepoResult<Assignment> {
        let removed = self.repo.delete_assignment(course_id, index)?;
        info!(
            "event=assignment_delete module=service status=ok course_id={course_id} index={index}"
        );
        Ok(removed)
    }

    /// Removes a course together with all of its assignments.
    pub fn delete_course(&mut self, course_id: CourseId) -> RepoResult<Course> {
        let removed = self.repo.delete_course(course_id)?;
        info!(
            "event=course_delete module=service status=ok course_id={course_id} assignments={}",
            removed.assignments.len()
        );
        Ok(removed)
    }

    /// Percentage/letter for one course; `None` if missing or ungraded.
    pub fn course_grade(&self, course_id: CourseId) -> Option<CourseGrade> {
        self.repo.get_course(course_id).and_then(course_grade)
    }

    pub fn has_graded_courses(&self) -> bool {
        has_graded_courses(self.repo.list_courses())
    }

    /// Returns `0.0` when nothing is graded; pair with `has_graded_courses`.
    pub fn overall_gpa(&self) -> f64 {
        overall_gpa(self.repo.list_courses())
    }

    pub fn grade_distribution(&self) -> Option<GradeDistribution> {
        grade_distribution(self.repo.list_courses())
    }

    /// Runs a what-if simulation against a copy of the current courses.
    pub fn what_if(
        &self,
        course_id: CourseId,
        name: &str,
        earned: f64,
        max: f64,
    ) -> Result<WhatIfOutcome, WhatIfError> {
        let hypothetical = Assignment::new(name, earned, max)?;
        let outcome = simulate(self.repo.list_courses(), course_id, hypothetical)?;
        info!("event=what_if module=service status=ok course_id={course_id}");
        Ok(outcome)
    }
}
