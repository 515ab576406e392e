//! Course/assignment domain model.
//!
//! # Responsibility
//! - Define the records owned by the in-memory course store.
//! - Validate numeric fields before they enter the store.
//!
//! # Invariants
//! - Every `Course` is identified by a `CourseId` that is never reused.
//! - Derived grade values are never stored on these records.

pub mod course;
