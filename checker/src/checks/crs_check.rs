//! Check for coordinate-reference-system candidates: type, then projection name.

use crate::traits::check::Check;
use crate::types::CheckOutcome;
use util::assignment::{Assignment, AssignmentKind};
use util::lesson_config::LessonConfig;
use util::value::Value;

pub struct CrsCheck;

impl Check for CrsCheck {
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        config: &LessonConfig,
    ) -> Vec<CheckOutcome> {
        let AssignmentKind::Crs { name: expected } = &assignment.kind else {
            return Vec::new();
        };

        let name = &assignment.name;
        let mut outcomes = Vec::new();

        let Value::Crs(info) = candidate else {
            outcomes.push(CheckOutcome::failed(format!(
                "Variable '{name}' exists, but is not a CRS object."
            )));
            if expected.is_some() {
                outcomes.push(CheckOutcome::skipped(format!(
                    "Skipped the projection check for '{name}' because it is not a CRS object."
                )));
            }
            return outcomes;
        };

        outcomes.push(CheckOutcome::passed(format!(
            "Variable '{name}' is a CRS object."
        )));

        if let Some(expected_name) = expected {
            if info.name == *expected_name {
                outcomes.push(CheckOutcome::passed(format!(
                    "'{name}' has the correct projection data!"
                )));
            } else {
                let mut message = if config.output.show_values {
                    format!(
                        "Variable '{name}' exists and is a CRS object, but has the wrong \
                         values in it: it is set to {}. Make sure you checked the correct \
                         table.",
                        info.name
                    )
                } else {
                    format!(
                        "Variable '{name}' exists and is a CRS object, but has the wrong \
                         values in it. Make sure you checked the correct table."
                    )
                };
                if let Some(hint) = &assignment.hint {
                    message.push(' ');
                    message.push_str(hint);
                }
                outcomes.push(CheckOutcome::failed(message));
            }
        }

        outcomes
    }
}
