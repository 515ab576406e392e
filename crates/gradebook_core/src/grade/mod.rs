//! Grade computation over course records.
//!
//! # Responsibility
//! - Turn raw (earned, max) pairs into percentages, letters and a GPA.
//! - Summarize graded courses into a letter distribution.
//!
//! # Invariants
//! - Every function here is pure; callers pass read-only views.
//! - Courses without assignments never contribute to GPA or distribution.

pub mod distribution;
pub mod engine;
pub mod letter;
