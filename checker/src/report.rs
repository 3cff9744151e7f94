//! # Feedback Report Module
//!
//! This module defines the data structures and response envelope for returning check results
//! from the checker system. It provides a standardized, serializable format for reporting
//! per-assignment feedback and an overall progress summary.
//!
//! ## Overview
//!
//! The main types are:
//! - [`FeedbackReport`]: Contains all feedback for one lesson run, including per-assignment
//!   messages and a summary.
//! - [`FeedbackReportResponse`]: A response envelope that wraps a [`FeedbackReport`] with
//!   success and message fields.
//!
//! A report is constructed fresh per invocation and discarded after display; nothing is
//! stored between invocations.

use serde::Serialize;

/// Feedback for one assignment: the rendered message plus how many of its
/// evaluated predicates passed.
#[derive(Debug, Clone, Serialize)]
pub struct ReportAssignment {
    /// The expected variable name.
    pub name: String,
    /// The rendered feedback message for this assignment.
    pub message: String,
    /// Predicates that passed.
    pub passed: usize,
    /// Predicates that were evaluated (skipped ones excluded).
    pub total: usize,
}

/// Whole-lesson progress counters.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub passed: usize,
    pub total: usize,
    /// Percentage of evaluated predicates that passed (0-100).
    pub progress: u32,
}

/// The report generated for one run of a lesson's checks.
#[derive(Debug, Serialize)]
pub struct FeedbackReport {
    pub lesson: String,
    /// RFC 3339 timestamp of when the report was generated.
    pub generated_at: String,
    pub assignments: Vec<ReportAssignment>,
    pub summary: ReportSummary,
}

impl FeedbackReport {
    /// The printable form the notebook-style caller displays: one block per
    /// assignment, blank-line separated, in authored order.
    pub fn render(&self) -> String {
        self.assignments
            .iter()
            .map(|a| a.message.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// The response envelope for check results.
///
/// Wraps a [`FeedbackReport`] and adds top-level `success` and `message` fields for
/// consistency with other response shapes.
#[derive(Debug, Serialize)]
pub struct FeedbackReportResponse {
    /// Indicates the checks ran to completion.
    pub success: bool,
    /// A short human-readable message.
    pub message: String,
    /// The detailed feedback report.
    pub data: FeedbackReport,
}

/// Enables ergonomic conversion from [`FeedbackReport`] to [`FeedbackReportResponse`].
impl From<FeedbackReport> for FeedbackReportResponse {
    fn from(report: FeedbackReport) -> Self {
        FeedbackReportResponse {
            success: true,
            message: "Checks complete.".to_string(),
            data: report,
        }
    }
}
