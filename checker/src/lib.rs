//! # Checker Library
//!
//! This module provides the core logic for checking lesson assignments: the expected
//! variables a student was asked to create in a teaching notebook. It supports loading
//! and validating authored assignment sets, evaluating candidate values against them
//! using pluggable check strategies, and generating feedback reports that continue past
//! failures so the student sees every problem at once.
//!
//! ## Key Concepts
//! - **CheckJob**: The main struct representing one run of a lesson's checks.
//! - **Checks**: Pluggable strategies evaluating one assignment kind's predicates
//!   (scalars, sequences, tables, plots, ...).
//! - **Feedback**: Rendering of the evaluated outcomes into student-facing messages.
//! - **Reports**: Structured output summarizing the feedback per assignment.
//!
//! The checker holds no global state: the caller resolves variable names to values and
//! registers them on the job; a name that was never registered is reported as an absent
//! variable, not an error.

pub mod checks;
pub mod error;
pub mod feedback;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

use crate::error::CheckerError;
use crate::feedback::annotated_feedback::AnnotatedFeedback;
use crate::feedback::plain_feedback::PlainFeedback;
use crate::report::{FeedbackReport, FeedbackReportResponse, ReportAssignment, ReportSummary};
use crate::traits::feedback::Feedback;
use crate::types::{CheckOutcome, CheckResult};

use chrono::Utc;
use std::collections::HashMap;
use util::assignment::AssignmentSet;
use util::lesson_config::{LessonConfig, ReportScheme};
use util::value::Value;

/// Represents one run of a lesson's checks against a student's variables.
///
/// The caller registers each candidate it could resolve; assignments whose names were
/// never registered are reported as absent. Registering a name the assignment set does
/// not contain is a caller error.
///
/// # Fields
/// - `assignments`: The authored assignment set for the lesson.
/// - `candidates`: The resolved candidate values, keyed by variable name.
/// - `feedback`: Strategy rendering outcomes into messages (chosen from the lesson
///   configuration's report scheme, overridable).
/// - `config`: Lesson-level check and output options.
pub struct CheckJob<'a> {
    assignments: AssignmentSet,
    candidates: HashMap<String, Value>,
    feedback: Box<dyn Feedback + 'a>,
    config: LessonConfig,
}

impl<'a> CheckJob<'a> {
    /// Create a new check job for an assignment set.
    ///
    /// The feedback strategy defaults to the one selected by
    /// `config.output.report_scheme`.
    pub fn new(assignments: AssignmentSet, config: LessonConfig) -> Self {
        let feedback: Box<dyn Feedback> = match config.output.report_scheme {
            ReportScheme::Plain => Box::new(PlainFeedback),
            ReportScheme::Annotated => Box::new(AnnotatedFeedback),
        };
        Self {
            assignments,
            candidates: HashMap::new(),
            feedback,
            config,
        }
    }

    /// Register the candidate value the caller resolved for `name`.
    ///
    /// An assignment with no registered candidate is reported as an absent variable.
    pub fn with_candidate(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.candidates.insert(name.into(), value.into());
        self
    }

    /// Set a custom feedback strategy for this job.
    pub fn with_feedback<F: Feedback + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Run the checks and generate a report.
    ///
    /// # Returns
    /// * `Ok(FeedbackReportResponse)` on success, containing the full feedback report.
    /// * `Err(CheckerError)` if a candidate was registered under an unknown name or
    ///   feedback rendering fails.
    ///
    /// # Steps
    /// 1. Rejects candidates whose names are not in the assignment set.
    /// 2. For each assignment, in authored order: the existence guard, then the type
    ///    check, then any value/shape checks (moot ones recorded as skipped).
    /// 3. Renders feedback with the configured strategy.
    /// 4. Builds the report with per-assignment messages and an overall summary.
    pub fn check(self) -> Result<FeedbackReportResponse, CheckerError> {
        for name in self.candidates.keys() {
            if self.assignments.find(name).is_none() {
                return Err(CheckerError::UnknownAssignment(format!(
                    "Candidate '{}' has no assignment in lesson '{}'",
                    name, self.assignments.lesson
                )));
            }
        }

        let mut results: Vec<CheckResult> = Vec::new();
        for assignment in &self.assignments.assignments {
            let name = &assignment.name;
            let mut result = CheckResult::new(name.clone());

            match self.candidates.get(name) {
                None => {
                    // The only short-circuiting failure: nothing else is worth
                    // reporting about a variable that does not exist.
                    result.push(CheckOutcome::failed(format!(
                        "Could not find a variable named '{name}'. Make sure you spelled \
                         the variable name correctly and ran the cell above that defines it."
                    )));
                }
                Some(candidate) => {
                    result.push(CheckOutcome::passed(format!(
                        "Variable '{name}' is defined."
                    )));
                    let check = checks::check_for(&assignment.kind);
                    result.extend(check.evaluate(assignment, candidate, &self.config));
                }
            }

            results.push(result);
        }

        let feedback_entries = self.feedback.assemble_feedback(&results)?;
        let progress = scorer::compute_overall_progress(&results)?;

        let mut passed = 0usize;
        let mut total = 0usize;
        let mut report_assignments = Vec::with_capacity(results.len());
        for (result, entry) in results.iter().zip(feedback_entries) {
            passed += result.passed_count();
            total += result.evaluated_count();
            report_assignments.push(ReportAssignment {
                name: result.name.clone(),
                message: entry.message,
                passed: result.passed_count(),
                total: result.evaluated_count(),
            });
        }

        let report = FeedbackReport {
            lesson: self.assignments.lesson.clone(),
            generated_at: Utc::now().to_rfc3339(),
            assignments: report_assignments,
            summary: ReportSummary {
                passed,
                total,
                progress,
            },
        };

        Ok(report.into())
    }
}
