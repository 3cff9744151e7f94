//! Structural checks for list assignments: length, a typed element at a fixed
//! position, and at-least-one-element-of-type membership.
//!
//! Once the candidate is known to be a list, the configured predicates are
//! evaluated independently so the student sees every problem at once rather
//! than only the first.

use crate::traits::check::Check;
use crate::types::CheckOutcome;
use util::assignment::{Assignment, AssignmentKind};
use util::lesson_config::LessonConfig;
use util::value::Value;

pub struct SequenceCheck;

impl Check for SequenceCheck {
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        config: &LessonConfig,
    ) -> Vec<CheckOutcome> {
        let AssignmentKind::Sequence {
            length,
            element_at,
            contains,
        } = &assignment.kind
        else {
            return Vec::new();
        };

        let name = &assignment.name;
        let strict = config.checks.strict_booleans;
        let mut outcomes = Vec::new();

        let Value::Sequence(items) = candidate else {
            outcomes.push(CheckOutcome::failed(format!(
                "'{name}' is not a list. Make sure that you formatted the list correctly \
                 and spelled the variable name correctly."
            )));
            if length.is_some() || element_at.is_some() || !contains.is_empty() {
                outcomes.push(CheckOutcome::skipped(format!(
                    "Skipped the length and element checks for '{name}' because it is not a list."
                )));
            }
            return outcomes;
        };

        outcomes.push(CheckOutcome::passed(format!("'{name}' is a list!")));

        if let Some(expected_len) = length {
            if items.len() == *expected_len {
                outcomes.push(CheckOutcome::passed(format!(
                    "'{name}' has the correct length!"
                )));
            } else {
                let message = if config.output.show_values {
                    format!(
                        "'{name}' does not have the correct length: it has {} values. \
                         Make sure that the list has exactly {expected_len} values in it.",
                        items.len()
                    )
                } else {
                    format!(
                        "'{name}' does not have the correct length. \
                         Make sure that the list has exactly {expected_len} values in it."
                    )
                };
                outcomes.push(CheckOutcome::failed(message));
            }
        }

        if let Some(at) = element_at {
            let noun = at.element_type.article_name();
            let index = at.index;
            match items.get(index) {
                Some(v) if v.matches_tag(at.element_type, strict) => {
                    outcomes.push(CheckOutcome::passed(format!(
                        "'{name}' contains {noun} value at index {index}!"
                    )));
                }
                Some(_) => {
                    outcomes.push(CheckOutcome::failed(format!(
                        "'{name}' does not contain {noun} value at index {index}. \
                         Make sure to add {noun} value at list index {index}. \
                         Remember list indexing starts at 0!"
                    )));
                }
                None => {
                    outcomes.push(CheckOutcome::failed(format!(
                        "'{name}' does not have a value at index {index}. \
                         Make sure the list is long enough to have a value at index {index}."
                    )));
                }
            }
        }

        for tag in contains {
            let noun = tag.article_name();
            if items.iter().any(|v| v.matches_tag(*tag, strict)) {
                outcomes.push(CheckOutcome::passed(format!(
                    "'{name}' contains {noun} value!"
                )));
            } else {
                outcomes.push(CheckOutcome::failed(format!(
                    "'{name}' does not contain {noun} value. \
                     Make sure to make one of the values in your list {noun}."
                )));
            }
        }

        outcomes
    }
}
