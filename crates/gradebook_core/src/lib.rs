//! Core domain logic for the gradebook.
//! This crate is the single source of truth for course/grade invariants.

pub mod console;
pub mod grade;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use console::{Console, ConsoleError, ConsoleResult, Session};
pub use grade::distribution::{grade_distribution, GradeDistribution};
pub use grade::engine::{
    course_grade, course_percentage, has_graded_courses, overall_gpa, CourseGrade, GradeError,
};
pub use grade::letter::{grade_points_for_letter, letter_for_percentage, LetterGrade};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::course::{
    Assignment, Course, CourseId, CourseValidationError, MAX_CREDIT_HOURS, MIN_CREDIT_HOURS,
};
pub use repo::course_repo::{
    AssignmentEdit, CourseRepository, InMemoryCourseRepository, RenameOutcome, RepoError,
    RepoResult,
};
pub use service::gradebook_service::GradebookService;
pub use service::what_if::{simulate, WhatIfError, WhatIfOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Builds a session over an empty in-memory store.
pub fn new_session<I, O>(input: I, output: O) -> Session<InMemoryCourseRepository, I, O>
where
    I: std::io::BufRead,
    O: std::io::Write,
{
    Session::new(
        GradebookService::new(InMemoryCourseRepository::new()),
        Console::new(input, output),
    )
}
