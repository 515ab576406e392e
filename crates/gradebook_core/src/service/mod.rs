//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record store calls and grade queries into use-case APIs.
//! - Keep the console layer decoupled from store internals.

pub mod gradebook_service;
pub mod what_if;
