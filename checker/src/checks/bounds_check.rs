//! Check for bounding-box style array candidates: type, then approximate
//! equality under the lesson's relative/absolute tolerances.

use crate::traits::check::Check;
use crate::types::CheckOutcome;
use util::assignment::{Assignment, AssignmentKind};
use util::lesson_config::LessonConfig;
use util::value::Value;

pub struct BoundsCheck;

/// Element-wise closeness: |a - b| <= abs_tol + rel_tol * |b|.
fn all_close(actual: &[f64], expected: &[f64], rel_tol: f64, abs_tol: f64) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, b)| (a - b).abs() <= abs_tol + rel_tol * b.abs())
}

impl Check for BoundsCheck {
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        config: &LessonConfig,
    ) -> Vec<CheckOutcome> {
        let AssignmentKind::Bounds { expected } = &assignment.kind else {
            return Vec::new();
        };

        let name = &assignment.name;
        let mut outcomes = Vec::new();

        let Value::Array(values) = candidate else {
            outcomes.push(CheckOutcome::failed(format!(
                "Variable '{name}' exists, but is not an array."
            )));
            outcomes.push(CheckOutcome::skipped(format!(
                "Skipped the data check for '{name}' because it is not an array."
            )));
            return outcomes;
        };

        outcomes.push(CheckOutcome::passed(format!(
            "Variable '{name}' is an array."
        )));

        if all_close(
            values,
            expected,
            config.checks.rel_tolerance,
            config.checks.abs_tolerance,
        ) {
            outcomes.push(CheckOutcome::passed(format!(
                "'{name}' has the correct data!"
            )));
        } else {
            let mut message = if config.output.show_values {
                format!(
                    "Variable '{name}' exists and is an array, but has the wrong values \
                     in it: it is assigned {candidate}. Make sure you checked the correct \
                     table."
                )
            } else {
                format!(
                    "Variable '{name}' exists and is an array, but has the wrong values \
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckStatus;

    const SOAP_BOUNDS: [f64; 4] = [296955.1971, 4100083.0279, 300555.1971, 4101493.0279];

    fn soap_bounds() -> Assignment {
        Assignment {
            name: "soap_bounds".to_string(),
            kind: AssignmentKind::Bounds {
                expected: SOAP_BOUNDS.to_vec(),
            },
            hint: None,
        }
    }

    #[test]
    fn test_exact_bounds() {
        let outcomes = BoundsCheck.evaluate(
            &soap_bounds(),
            &Value::Array(SOAP_BOUNDS.to_vec()),
            &LessonConfig::default_config(),
        );
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.status == CheckStatus::Passed));
    }

    #[test]
    fn test_nearly_equal_bounds_pass() {
        let mut values = SOAP_BOUNDS.to_vec();
        values[0] += 1e-4; // within rel_tolerance of a ~3e5 coordinate
        let outcomes = BoundsCheck.evaluate(
            &soap_bounds(),
            &Value::Array(values),
            &LessonConfig::default_config(),
        );
        assert!(outcomes.iter().all(|o| o.status == CheckStatus::Passed));
    }

    #[test]
    fn test_wrong_bounds_fail() {
        let outcomes = BoundsCheck.evaluate(
            &soap_bounds(),
            &Value::Array(vec![0.0, 0.0, 1.0, 1.0]),
            &LessonConfig::default_config(),
        );
        assert_eq!(outcomes[1].status, CheckStatus::Failed);
        assert!(outcomes[1].message.contains("wrong values"));
    }

    #[test]
    fn test_length_mismatch_fails() {
        let outcomes = BoundsCheck.evaluate(
            &soap_bounds(),
            &Value::Array(SOAP_BOUNDS[..3].to_vec()),
            &LessonConfig::default_config(),
        );
        assert_eq!(outcomes[1].status, CheckStatus::Failed);
    }

    #[test]
    fn test_non_array_candidate() {
        let outcomes = BoundsCheck.evaluate(
            &soap_bounds(),
            &Value::Sequence(vec![Value::Float(0.0)]),
            &LessonConfig::default_config(),
        );
        assert_eq!(outcomes[0].status, CheckStatus::Failed);
        assert!(outcomes[0].message.contains("is not an array"));
        assert_eq!(outcomes[1].status, CheckStatus::Skipped);
    }
}
