use crate::types::CheckOutcome;
use util::assignment::Assignment;
use util::lesson_config::LessonConfig;
use util::value::Value;

/// Check is a strategy trait for evaluating one assignment's predicates.
/// Each implementation provides the logic for a family of assignment kinds
/// (scalars, sequences, tables, plots, ...).
pub trait Check: Send + Sync {
    /// Evaluate the assignment's type and value/shape predicates against a
    /// candidate that is known to exist, producing the ordered outcome lines.
    ///
    /// - `assignment`: the authored expectation (name, kind, optional hint).
    /// - `candidate`: the value the caller resolved for the assignment name.
    /// - `config`: lesson-level options (boolean strictness, tolerances,
    ///   whether to echo actual values).
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        config: &LessonConfig,
    ) -> Vec<CheckOutcome>;
}
