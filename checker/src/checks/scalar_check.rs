//! Checks for scalar assignments: integers, floats, and strings.
//!
//! The type line and the value line are reported separately so a student whose
//! variable has the right type but the wrong value still sees the type
//! affirmation. When the type line fails, the value comparison is moot and is
//! recorded as skipped rather than evaluated against a wrongly-typed candidate.

use crate::traits::check::Check;
use crate::types::CheckOutcome;
use util::assignment::{Assignment, AssignmentKind};
use util::lesson_config::LessonConfig;
use util::value::{TypeTag, Value};

/// Evaluates integer, float, and string assignments: one type outcome, then
/// one value outcome when an expected value was authored.
///
/// A boolean candidate never satisfies an integer expectation while
/// `strict_booleans` is on; the lenient host-language classification can be
/// restored through lesson configuration.
pub struct ScalarCheck;

impl Check for ScalarCheck {
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        config: &LessonConfig,
    ) -> Vec<CheckOutcome> {
        match &assignment.kind {
            AssignmentKind::Integer { expected } => scalar_outcomes(
                assignment,
                candidate,
                config,
                TypeTag::Integer,
                expected.map(Value::Integer).as_ref(),
                "Make sure you assigned it a whole number.",
            ),
            AssignmentKind::Float { expected } => scalar_outcomes(
                assignment,
                candidate,
                config,
                TypeTag::Float,
                expected.map(Value::Float).as_ref(),
                "Make sure you assigned it a number with a decimal value.",
            ),
            AssignmentKind::Text { expected } => scalar_outcomes(
                assignment,
                candidate,
                config,
                TypeTag::Text,
                expected.clone().map(Value::Text).as_ref(),
                "Make sure you assigned it a value surrounded by quotes.",
            ),
            _ => Vec::new(),
        }
    }
}

fn scalar_outcomes(
    assignment: &Assignment,
    candidate: &Value,
    config: &LessonConfig,
    tag: TypeTag,
    expected: Option<&Value>,
    type_guidance: &str,
) -> Vec<CheckOutcome> {
    let name = &assignment.name;
    let noun = tag.article_name();
    let mut outcomes = Vec::new();

    if candidate.matches_tag(tag, config.checks.strict_booleans) {
        outcomes.push(CheckOutcome::passed(format!(
            "Variable '{name}' is {noun}, good job!"
        )));
        if let Some(expected) = expected {
            outcomes.push(value_outcome(assignment, candidate, expected, noun, config));
        }
    } else {
        let message = match candidate {
            Value::Boolean(_) if tag == TypeTag::Integer => format!(
                "Variable '{name}' exists, but is a boolean, not an integer. \
                 Make sure you assigned it a whole number, not a true/false value."
            ),
            _ => format!("Variable '{name}' exists, but is not {noun}. {type_guidance}"),
        };
        outcomes.push(CheckOutcome::failed(message));
        if expected.is_some() {
            outcomes.push(CheckOutcome::skipped(format!(
                "Skipped the value check for '{name}' because the type check did not pass."
            )));
        }
    }

    outcomes
}

fn value_outcome(
    assignment: &Assignment,
    candidate: &Value,
    expected: &Value,
    noun: &str,
    config: &LessonConfig,
) -> CheckOutcome {
    let name = &assignment.name;
    if candidate.loosely_equals(expected) {
        return CheckOutcome::passed(format!("Variable '{name}' equals {expected}, good job!"));
    }

    let mut message = if config.output.show_values {
        format!(
            "Variable '{name}' exists and is {noun}, but has the wrong value: \
             it is assigned {candidate}."
        )
    } else {
        format!("Variable '{name}' exists and is {noun}, but has the wrong value.")
    };
    if let Some(hint) = &assignment.hint {
        message.push(' ');
        message.push_str(hint);
    }
    CheckOutcome::failed(message)
}
