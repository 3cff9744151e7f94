//! Check for geospatial table candidates: type, then row count.

use crate::traits::check::Check;
use crate::types::CheckOutcome;
use util::assignment::{Assignment, AssignmentKind};
use util::lesson_config::LessonConfig;
use util::value::Value;

pub struct TableCheck;

impl Check for TableCheck {
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        config: &LessonConfig,
    ) -> Vec<CheckOutcome> {
        let AssignmentKind::Table { rows } = &assignment.kind else {
            return Vec::new();
        };

        let name = &assignment.name;
        let mut outcomes = Vec::new();

        let Value::Table(info) = candidate else {
            outcomes.push(CheckOutcome::failed(format!(
                "Variable '{name}' exists, but is not a geospatial table. \
                 Make sure you opened '{name}' with the vector data reader."
            )));
            if rows.is_some() {
                outcomes.push(CheckOutcome::skipped(format!(
                    "Skipped the data check for '{name}' because it is not a geospatial table."
                )));
            }
            return outcomes;
        };

        outcomes.push(CheckOutcome::passed(format!(
            "Variable '{name}' is a geospatial table, good job!"
        )));

        if let Some(expected_rows) = rows {
            if info.rows == *expected_rows {
                outcomes.push(CheckOutcome::passed(format!(
                    "'{name}' has the correct amount of data, good job!"
                )));
            } else {
                let mut message = if config.output.show_values {
                    format!(
                        "Variable '{name}' exists and is a geospatial table, but has the \
                         wrong values in it: it has {} rows. Make sure you opened the \
                         correct file.",
                        info.rows
                    )
                } else {
                    format!(
                        "Variable '{name}' exists and is a geospatial table, but has the \
                         wrong values in it. Make sure you opened the correct file."
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
