//! # Types Module
//!
//! This module defines the core data structures used throughout the checker system.
//! These types represent the outcome of evaluating one assignment's predicates against
//! a candidate value.

use serde::Serialize;

/// The status of a single evaluated predicate.
///
/// `Skipped` records a predicate that was moot (its type prerequisite did not pass)
/// rather than silently dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

/// One line of the feedback report: a status plus the affirmation or
/// corrective-guidance text shown to the student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckOutcome {
    pub fn passed(message: impl Into<String>) -> Self {
        CheckOutcome {
            status: CheckStatus::Passed,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        CheckOutcome {
            status: CheckStatus::Failed,
            message: message.into(),
        }
    }

    pub fn skipped(message: impl Into<String>) -> Self {
        CheckOutcome {
            status: CheckStatus::Skipped,
            message: message.into(),
        }
    }
}

/// The ordered outcomes for a single assignment: existence, then type, then
/// value/shape lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// The expected variable name.
    pub name: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckResult {
    pub fn new(name: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn extend(&mut self, outcomes: Vec<CheckOutcome>) {
        self.outcomes.extend(outcomes);
    }

    /// Number of predicates that passed.
    pub fn passed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == CheckStatus::Passed)
            .count()
    }

    /// Number of predicates that were actually evaluated (skipped excluded).
    pub fn evaluated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status != CheckStatus::Skipped)
            .count()
    }
}
