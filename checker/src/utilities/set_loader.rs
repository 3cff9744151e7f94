//!
//! Assignment Set Loader
//!
//! This module provides utilities for loading and validating an authored assignment set
//! from a JSON file before running checks against it.
//!
//! # Functionality
//!
//! - Checks the existence, type, and size of the assignment set file.
//! - Parses the JSON into an [`AssignmentSet`].
//! - Runs semantic validation: non-empty set, unique names, and per-kind predicate
//!   sanity (see [`validate_set`]).
//!
//! # Error Handling
//!
//! Returns [`CheckerError`] variants for missing files, size violations, invalid JSON,
//! or malformed assignments.

use crate::error::CheckerError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::error;
use util::assignment::{Assignment, AssignmentKind, AssignmentSet};

/// Maximum allowed size for assignment set files.
const MAX_JSON_SIZE: u64 = 2 * 1024 * 1024; // 2MB

/// Checks that a file exists, is a file, and does not exceed a maximum size.
///
/// # Errors
///
/// Returns [`CheckerError::IoError`] if the file is missing, not a file, unreadable,
/// or too large.
fn check_file(path: &Path, max_size: Option<u64>) -> Result<(), CheckerError> {
    if !path.exists() {
        error!("File not found: {}", path.display());
        return Err(CheckerError::IoError("File not found".to_string()));
    }

    if !path.is_file() {
        error!("Not a file: {}", path.display());
        return Err(CheckerError::IoError("Invalid file type".to_string()));
    }

    let metadata = fs::metadata(path).map_err(|e| {
        error!("File unreadable: {} - {}", path.display(), e);
        CheckerError::IoError("File unreadable".to_string())
    })?;

    if let Some(max) = max_size {
        if metadata.len() > max {
            error!(
                "File too large: {} ({} bytes, max {} bytes)",
                path.display(),
                metadata.len(),
                max
            );
            return Err(CheckerError::IoError("File too large".to_string()));
        }
    }

    Ok(())
}

/// Loads and validates an assignment set from a JSON file.
///
/// # Errors
///
/// Returns [`CheckerError`] for missing files, size violations, invalid JSON, or
/// malformed assignments.
pub fn load_set_file(path: &Path) -> Result<AssignmentSet, CheckerError> {
    check_file(path, Some(MAX_JSON_SIZE))?;

    let raw = fs::read_to_string(path).map_err(|e| {
        error!("Failed to read assignment set {}: {}", path.display(), e);
        CheckerError::IoError("Assignment set unreadable".to_string())
    })?;

    let set: AssignmentSet = serde_json::from_str(&raw)
        .map_err(|e| CheckerError::InvalidJson(format!("Invalid assignment set JSON: {e}")))?;

    validate_set(&set)?;
    Ok(set)
}

/// Validates an assignment set's semantics: non-empty, unique names, and at least one
/// meaningful predicate per assignment.
pub fn validate_set(set: &AssignmentSet) -> Result<(), CheckerError> {
    if set.assignments.is_empty() {
        return Err(CheckerError::MissingField(format!(
            "assignment set '{}' has no assignments",
            set.lesson
        )));
    }

    let mut seen = HashSet::new();
    for assignment in &set.assignments {
        if !seen.insert(assignment.name.as_str()) {
            return Err(CheckerError::InvalidAssignment(format!(
                "duplicate assignment name '{}'",
                assignment.name
            )));
        }
        validate_assignment(assignment)?;
    }

    Ok(())
}

fn validate_assignment(assignment: &Assignment) -> Result<(), CheckerError> {
    let name = assignment.name.trim();
    if name.is_empty() {
        return Err(CheckerError::InvalidAssignment(
            "assignment name is empty".to_string(),
        ));
    }

    match &assignment.kind {
        AssignmentKind::Sequence {
            length,
            element_at,
            contains,
        } => {
            if length.is_none() && element_at.is_none() && contains.is_empty() {
                return Err(CheckerError::InvalidAssignment(format!(
                    "sequence assignment '{name}' has no checks"
                )));
            }
            if let (Some(len), Some(at)) = (length, element_at) {
                if at.index >= *len {
                    return Err(CheckerError::InvalidAssignment(format!(
                        "sequence assignment '{name}' expects length {len} but checks index {}",
                        at.index
                    )));
                }
            }
        }
        AssignmentKind::SequenceEquals { expected, .. } => {
            if expected.is_empty() {
                return Err(CheckerError::InvalidAssignment(format!(
                    "sequence_equals assignment '{name}' has no expected values"
                )));
            }
        }
        AssignmentKind::Operations { names } => {
            if names.is_empty() {
                return Err(CheckerError::InvalidAssignment(format!(
                    "operations assignment '{name}' has no operation names"
                )));
            }
        }
        AssignmentKind::Bounds { expected } => {
            if expected.is_empty() {
                return Err(CheckerError::InvalidAssignment(format!(
                    "bounds assignment '{name}' has no expected values"
                )));
            }
        }
        AssignmentKind::Shape { expected } => {
            if expected.is_empty() {
                return Err(CheckerError::InvalidAssignment(format!(
                    "shape assignment '{name}' has no expected dimensions"
                )));
            }
        }
        AssignmentKind::Plot {
            kind,
            title_keywords,
            x_keywords,
            y_keywords,
        } => {
            if kind.is_none()
                && title_keywords.is_empty()
                && x_keywords.is_empty()
                && y_keywords.is_empty()
            {
                return Err(CheckerError::InvalidAssignment(format!(
                    "plot assignment '{name}' has no checks"
                )));
            }
            let has_empty_group = [title_keywords, x_keywords, y_keywords]
                .iter()
                .any(|groups| groups.iter().any(|group| group.is_empty()));
            if has_empty_group {
                return Err(CheckerError::InvalidAssignment(format!(
                    "plot assignment '{name}' has an empty keyword group"
                )));
            }
        }
        AssignmentKind::Integer { .. }
        | AssignmentKind::Float { .. }
        | AssignmentKind::Text { .. }
        | AssignmentKind::Table { .. }
        | AssignmentKind::Crs { .. } => {}
    }

    Ok(())
}
