//!
//! # Feedback Trait
//!
//! This module defines the [`Feedback`] trait and the [`FeedbackEntry`] struct, which are used
//! to implement pluggable feedback strategies for the checker system.
//!
//! Each feedback strategy renders the evaluated outcomes of the checks into one message per
//! assignment, allowing different renderings of the same structured results (plain text,
//! status-annotated text, ...).
//!

use crate::error::CheckerError;
use crate::types::CheckResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub assignment: String,
    pub message: String,
}

/// A trait for pluggable feedback strategies in the checker system.
///
/// Implement this trait to define how the structured check outcomes are rendered into
/// student-facing messages.
///
/// # Arguments
/// - `results`: A slice of [`CheckResult`]s, one per assignment, in report order.
///
/// # Returns
/// - `Ok(Vec<FeedbackEntry>)`: One entry per result, in the same order.
/// - `Err(CheckerError)`: If feedback rendering fails.
pub trait Feedback {
    fn assemble_feedback(&self, results: &[CheckResult]) -> Result<Vec<FeedbackEntry>, CheckerError>;
}
