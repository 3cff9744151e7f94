//! Check for shape-tuple candidates: type, then exact dimensions.

use crate::traits::check::Check;
use crate::types::CheckOutcome;
use util::assignment::{Assignment, AssignmentKind};
use util::lesson_config::LessonConfig;
use util::value::Value;

pub struct ShapeCheck;

impl Check for ShapeCheck {
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        config: &LessonConfig,
    ) -> Vec<CheckOutcome> {
        let AssignmentKind::Shape { expected } = &assignment.kind else {
            return Vec::new();
        };

        let name = &assignment.name;
        let mut outcomes = Vec::new();

        let Value::Tuple(items) = candidate else {
            outcomes.push(CheckOutcome::failed(format!(
                "Variable '{name}' exists, but is not the correct data type."
            )));
            outcomes.push(CheckOutcome::skipped(format!(
                "Skipped the data check for '{name}' because it is not a tuple."
            )));
            return outcomes;
        };

        outcomes.push(CheckOutcome::passed(format!(
            "Variable '{name}' is a tuple."
        )));

        let matches = items.len() == expected.len()
            && items
                .iter()
                .zip(expected)
                .all(|(item, dim)| item.loosely_equals(&Value::Integer(*dim as i64)));

        if matches {
            outcomes.push(CheckOutcome::passed(format!(
                "'{name}' has the correct data!"
            )));
        } else {
            let mut message = if config.output.show_values {
                format!(
                    "Variable '{name}' exists and is a tuple, but has the wrong values \
                     in it: it is assigned {candidate}. Make sure you checked the correct \
                     table."
                )
            } else {
                format!(
                    "Variable '{name}' exists and is a tuple, but has the wrong values \
                     in it. Make sure you checked the correct table."
                )
            };
            if let Some(hint) = &assignment.hint {
                message.push(' ');
                message.push_str(hint);
            }
            outcomes.push(CheckOutcome::failed(message));
        }

        outcomes
    }
}
