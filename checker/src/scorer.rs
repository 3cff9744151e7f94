//! # Scorer Module
//!
//! This module provides functions for summarizing check outcomes. The primary function,
//! `compute_overall_progress`, aggregates individual check results into a single
//! percentage.

use crate::error::CheckerError;
use crate::types::CheckResult;

/// Computes overall progress as a percentage from a slice of `CheckResult`s.
///
/// Progress is the share of evaluated predicates (skipped ones excluded) that passed,
/// across all assignments, rounded to the nearest integer.
///
/// # Arguments
///
/// * `results` - A slice of `CheckResult` structs, one per assignment.
///
/// # Returns
///
/// A `Result` containing the progress as a `u32` between 0 and 100.
/// - `Ok(u32)`: The rounded percentage. If `results` is empty or nothing was evaluated,
///   returns `Ok(0)`.
/// - `Err(CheckerError)`: Not returned by the current implementation; part of the
///   signature for future compatibility.
pub fn compute_overall_progress(results: &[CheckResult]) -> Result<u32, CheckerError> {
    if results.is_empty() {
        return Ok(0);
    }

    let mut passed = 0usize;
    let mut total = 0usize;

    for result in results {
        passed += result.passed_count();
        total += result.evaluated_count();
    }

    if total == 0 {
        return Ok(0);
    }

    Ok(((passed as f64 / total as f64) * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckOutcome;

    fn make_result(passed: usize, failed: usize, skipped: usize) -> CheckResult {
        let mut result = CheckResult::new("var");
        for _ in 0..passed {
            result.push(CheckOutcome::passed("ok"));
        }
        for _ in 0..failed {
            result.push(CheckOutcome::failed("bad"));
        }
        for _ in 0..skipped {
            result.push(CheckOutcome::skipped("moot"));
        }
        result
    }

    #[test]
    fn test_basic_percentage() {
        let results = vec![make_result(2, 0, 0), make_result(1, 1, 0)];
        // 3 of 4 evaluated predicates passed.
        assert_eq!(compute_overall_progress(&results).unwrap(), 75);
    }

    #[test]
    fn test_empty_results() {
        let results: Vec<CheckResult> = vec![];
        assert_eq!(compute_overall_progress(&results).unwrap(), 0);
    }

    #[test]
    fn test_skipped_predicates_ignored() {
        let results = vec![make_result(1, 0, 3)];
        assert_eq!(compute_overall_progress(&results).unwrap(), 100);
    }

    #[test]
    fn test_rounding() {
        let results = vec![make_result(2, 1, 0)];
        // 2/3 rounds to 67.
        assert_eq!(compute_overall_progress(&results).unwrap(), 67);
    }

    #[test]
    fn test_all_failed() {
        let results = vec![make_result(0, 4, 0)];
        assert_eq!(compute_overall_progress(&results).unwrap(), 0);
    }

    #[test]
    fn test_only_skipped_outcomes() {
        let results = vec![make_result(0, 0, 2)];
        assert_eq!(compute_overall_progress(&results).unwrap(), 0);
    }
}
