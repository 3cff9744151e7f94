//! # PlainFeedback Strategy
//!
//! This module provides the default `PlainFeedback` strategy for the checker system.
//! It implements the [`Feedback`] trait to render each assignment's outcome lines into
//! one newline-joined message, in evaluation order.
//!
//! Skipped outcomes are omitted: a moot check is simply not mentioned, matching how the
//! lesson notebooks read.

use crate::error::CheckerError;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::{CheckResult, CheckStatus};

/// Plain feedback strategy: the affirmation and guidance lines as the student
/// should read them, nothing else.
#[derive(Debug)]
pub struct PlainFeedback;

impl Feedback for PlainFeedback {
    fn assemble_feedback(
        &self,
        results: &[CheckResult],
    ) -> Result<Vec<FeedbackEntry>, CheckerError> {
        let mut feedback_entries = Vec::new();

        for result in results {
            let message = result
                .outcomes
                .iter()
                .filter(|o| o.status != CheckStatus::Skipped)
                .map(|o| o.message.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            feedback_entries.push(FeedbackEntry {
                assignment: result.name.clone(),
                message,
            });
        }

        Ok(feedback_entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckOutcome;

    fn make_result(name: &str, outcomes: Vec<CheckOutcome>) -> CheckResult {
        let mut result = CheckResult::new(name);
        result.extend(outcomes);
        result
    }

    #[test]
    fn test_lines_joined_in_order() {
        let result = make_result(
            "precip_int",
            vec![
                CheckOutcome::passed("Variable 'precip_int' is defined."),
                CheckOutcome::passed("Variable 'precip_int' is an integer, good job!"),
                CheckOutcome::passed("Variable 'precip_int' equals 46, good job!"),
            ],
        );
        let feedback = PlainFeedback.assemble_feedback(&[result]).unwrap();
        assert_eq!(
            feedback,
            vec![FeedbackEntry {
                assignment: "precip_int".to_string(),
                message: "Variable 'precip_int' is defined.\n\
                          Variable 'precip_int' is an integer, good job!\n\
                          Variable 'precip_int' equals 46, good job!"
                    .to_string(),
            }]
        );
    }

    #[test]
    fn test_skipped_lines_omitted() {
        let result = make_result(
            "precip_int",
            vec![
                CheckOutcome::failed("wrong type"),
                CheckOutcome::skipped("value check moot"),
            ],
        );
        let feedback = PlainFeedback.assemble_feedback(&[result]).unwrap();
        assert_eq!(feedback[0].message, "wrong type");
    }

    #[test]
    fn test_one_entry_per_result() {
        let results = vec![
            make_result("a", vec![CheckOutcome::passed("ok")]),
            make_result("b", vec![CheckOutcome::failed("bad")]),
        ];
        let feedback = PlainFeedback.assemble_feedback(&results).unwrap();
        assert_eq!(feedback.len(), 2);
        assert_eq!(feedback[0].assignment, "a");
        assert_eq!(feedback[1].assignment, "b");
    }
}
