//! Annotated feedback strategy: every outcome line, including skipped ones,
//! prefixed with its status. Useful when lesson authors want to see exactly
//! what was evaluated.

use crate::error::CheckerError;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::{CheckResult, CheckStatus};

pub struct AnnotatedFeedback;

fn prefix(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Passed => "PASS",
        CheckStatus::Failed => "FAIL",
        CheckStatus::Skipped => "SKIP",
    }
}

impl Feedback for AnnotatedFeedback {
    fn assemble_feedback(
        &self,
        results: &[CheckResult],
    ) -> Result<Vec<FeedbackEntry>, CheckerError> {
        let mut feedback_entries = Vec::new();

        for result in results {
            let message = result
                .outcomes
                .iter()
                .map(|o| format!("{}: {}", prefix(o.status), o.message))
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

    #[test]
    fn test_statuses_are_annotated() {
        let mut result = CheckResult::new("precip_int");
        result.push(CheckOutcome::passed("exists"));
        result.push(CheckOutcome::failed("wrong type"));
        result.push(CheckOutcome::skipped("value check moot"));

        let feedback = AnnotatedFeedback.assemble_feedback(&[result]).unwrap();
        assert_eq!(
            feedback[0].message,
            "PASS: exists\nFAIL: wrong type\nSKIP: value check moot"
        );
    }
}
