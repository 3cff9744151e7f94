//! Checker Error Types
//!
//! This module defines the [`CheckerError`] enum, which encapsulates all error types that can
//! occur while loading, validating, and running assignment checks.
//! Each variant provides a descriptive error message for robust error handling and debugging.
//!
//! Student-facing problems (an absent, mistyped, or wrongly-valued candidate) are never
//! errors: they become feedback lines in the report. `CheckerError` covers caller and
//! authoring mistakes only.

/// Represents all error types that can occur in the checker system.
#[derive(Debug)]
pub enum CheckerError {
    /// A candidate was registered under a name the assignment set does not contain.
    UnknownAssignment(String),
    /// An authored assignment is malformed (empty predicate set, duplicate name, etc.).
    InvalidAssignment(String),
    /// JSON is malformed or does not match the expected schema.
    InvalidJson(String),
    /// A required field is missing from input.
    MissingField(String),
    /// I/O error (file not found, unreadable, etc.).
    IoError(String),
}
