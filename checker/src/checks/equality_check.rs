//! Full-sequence equality check with an element-type-uniformity diagnostic.
//!
//! When the produced list differs from the authored one, the more specific
//! problem wins: if an element-type expectation is configured and violated,
//! that is reported instead of the generic mismatch, which would otherwise
//! drown it in a wall of values.

use crate::traits::check::Check;
use crate::types::CheckOutcome;
use util::assignment::{Assignment, AssignmentKind};
use util::lesson_config::LessonConfig;
use util::value::Value;

pub struct EqualityCheck;

impl Check for EqualityCheck {
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        config: &LessonConfig,
    ) -> Vec<CheckOutcome> {
        let AssignmentKind::SequenceEquals {
            expected,
            element_type,
        } = &assignment.kind
        else {
            return Vec::new();
        };

        let name = &assignment.name;
        let mut outcomes = Vec::new();

        let Value::Sequence(items) = candidate else {
            outcomes.push(CheckOutcome::failed(format!(
                "'{name}' is not a list. Make sure that you formatted the list correctly \
                 and spelled the variable name correctly."
            )));
            outcomes.push(CheckOutcome::skipped(format!(
                "Skipped the value check for '{name}' because it is not a list."
            )));
            return outcomes;
        };

        outcomes.push(CheckOutcome::passed(format!("'{name}' is a list!")));

        let matches = items.len() == expected.len()
            && items
                .iter()
                .zip(expected)
                .all(|(item, want)| item.loosely_equals(want));

        if matches {
            outcomes.push(CheckOutcome::passed(format!(
                "List '{name}' was successfully assigned and has the correct values!"
            )));
            return outcomes;
        }

        if let Some(tag) = element_type {
            let strict = config.checks.strict_booleans;
            if !items.iter().all(|v| v.matches_tag(*tag, strict)) {
                outcomes.push(CheckOutcome::failed(format!(
                    "The list '{name}' was successfully created, but not all of the values \
                     in the list are {} values.",
                    tag.noun()
                )));
                return outcomes;
            }
        }

        let mut message = if config.output.show_values {
            format!(
                "Your list '{name}' didn't match the expected values. \
                 Here is the list you produced: {candidate}."
            )
        } else {
            format!("Your list '{name}' didn't match the expected values.")
        };
        if let Some(hint) = &assignment.hint {
            message.push(' ');
            message.push_str(hint);
        }
        outcomes.push(CheckOutcome::failed(message));
        outcomes
    }
}
