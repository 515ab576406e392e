//! Record store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define id/index-qualified mutation contracts for courses.
//! - Keep id allocation owned by the store instance, not by the process.
//!
//! # Invariants
//! - Repository writes validate numeric fields before mutating.
//! - Repository APIs return semantic errors (`CourseNotFound`,
//!   `AssignmentNotFound`) instead of panicking on stale ids/indices.

pub mod course_repo;
