//! Check for a bundle of named boolean results that must all be true.
//!
//! The caller packs the operation results into a sequence in the same order
//! as the authored names. One failure line is emitted per false result so the
//! student sees every operation that still needs work.

use crate::traits::check::Check;
use crate::types::CheckOutcome;
use util::assignment::{Assignment, AssignmentKind};
use util::lesson_config::LessonConfig;
use util::value::Value;

pub struct OperationsCheck;

impl Check for OperationsCheck {
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        _config: &LessonConfig,
    ) -> Vec<CheckOutcome> {
        let AssignmentKind::Operations { names } = &assignment.kind else {
            return Vec::new();
        };

        let name = &assignment.name;

        let Value::Sequence(items) = candidate else {
            return vec![CheckOutcome::failed(format!(
                "'{name}' should be a list of operation results, but it is not a list."
            ))];
        };

        if items.len() != names.len() {
            return vec![CheckOutcome::failed(format!(
                "Expected {} operation results in '{name}', but found {}.",
                names.len(),
                items.len()
            ))];
        }

        let mut flags = Vec::with_capacity(names.len());
        for (op_name, item) in names.iter().zip(items) {
            match item {
                Value::Boolean(b) => flags.push((op_name, *b)),
                other => {
                    return vec![CheckOutcome::failed(format!(
                        "The result of your {op_name} operation should be true or false, \
                         but it is {}.",
                        other.type_name()
                    ))];
                }
            }
        }

        if flags.iter().all(|(_, b)| *b) {
            return vec![CheckOutcome::passed(
                "All operations are now returning true, good job!",
            )];
        }

        flags
            .iter()
            .filter(|(_, b)| !*b)
            .map(|(op_name, _)| {
                CheckOutcome::failed(format!(
                    "Your {op_name} operation is still returning false, \
                     check to see why that may be!"
                ))
            })
            .collect()
    }
}
