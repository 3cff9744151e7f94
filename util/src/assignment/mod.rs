use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, io::Write, path::PathBuf};
use tracing::error;

use crate::paths::{assignment_set_path, ensure_dir, lesson_dir};
use crate::value::{TypeTag, Value};

/// All expectations authored for one lesson, in the order they should be
/// reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentSet {
    pub generated_at: DateTime<Utc>,
    pub lesson: String,
    pub assignments: Vec<Assignment>,
}

/// One expected variable: its name, what it should look like, and optional
/// authored guidance appended when the value or shape is wrong.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub name: String,
    #[serde(flatten)]
    pub kind: AssignmentKind,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Position-and-type expectation for one element of a sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ElementAt {
    pub index: usize,
    pub element_type: TypeTag,
}

/// The target type of an assignment, plus its optional value/shape
/// expectations. Each variant owns the predicates that make sense for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssignmentKind {
    Integer {
        #[serde(default)]
        expected: Option<i64>,
    },
    Float {
        #[serde(default)]
        expected: Option<f64>,
    },
    Text {
        #[serde(default)]
        expected: Option<String>,
    },
    /// Structural list predicates: length, a typed element at a fixed
    /// position, and at-least-one-element-of-type membership.
    Sequence {
        #[serde(default)]
        length: Option<usize>,
        #[serde(default)]
        element_at: Option<ElementAt>,
        #[serde(default)]
        contains: Vec<TypeTag>,
    },
    /// Full equality against an authored sequence, with an optional
    /// element-type-uniformity diagnostic when the values differ.
    SequenceEquals {
        expected: Vec<Value>,
        #[serde(default)]
        element_type: Option<TypeTag>,
    },
    /// A bundle of named boolean results that must all be true.
    Operations { names: Vec<String> },
    Table {
        #[serde(default)]
        rows: Option<usize>,
    },
    Crs {
        #[serde(default)]
        name: Option<String>,
    },
    /// Approximate array equality (bounding boxes and the like).
    Bounds { expected: Vec<f64> },
    /// Exact tuple equality (table shapes and the like).
    Shape { expected: Vec<usize> },
    Plot {
        #[serde(default)]
        kind: Option<String>,
        #[serde(default)]
        title_keywords: Vec<Vec<String>>,
        #[serde(default)]
        x_keywords: Vec<Vec<String>>,
        #[serde(default)]
        y_keywords: Vec<Vec<String>>,
    },
}

impl AssignmentKind {
    /// The type tag the candidate is expected to carry.
    pub fn target_tag(&self) -> TypeTag {
        match self {
            AssignmentKind::Integer { .. } => TypeTag::Integer,
            AssignmentKind::Float { .. } => TypeTag::Float,
            AssignmentKind::Text { .. } => TypeTag::Text,
            AssignmentKind::Sequence { .. }
            | AssignmentKind::SequenceEquals { .. }
            | AssignmentKind::Operations { .. } => TypeTag::Sequence,
            AssignmentKind::Table { .. } => TypeTag::Table,
            AssignmentKind::Crs { .. } => TypeTag::Crs,
            AssignmentKind::Bounds { .. } => TypeTag::Array,
            AssignmentKind::Shape { .. } => TypeTag::Tuple,
            AssignmentKind::Plot { .. } => TypeTag::Plot,
        }
    }
}

impl AssignmentSet {
    pub fn new_now(lesson: impl Into<String>, assignments: Vec<Assignment>) -> Self {
        AssignmentSet {
            generated_at: Utc::now(),
            lesson: lesson.into(),
            assignments,
        }
    }

    pub fn find(&self, name: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.name == name)
    }
}

/// Read assignments.json for a lesson.
pub fn load_assignment_set(course: &str, lesson: &str) -> Result<AssignmentSet, String> {
    use std::io::ErrorKind;

    let path = assignment_set_path(course, lesson);

    let s = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::NotFound => "Assignment set not found".to_string(),
                ErrorKind::PermissionDenied => {
                    "Permission denied reading assignment set".to_string()
                }
                ErrorKind::InvalidData => "Assignment set is not valid UTF-8".to_string(),
                _ => format!("Failed to read assignment set ({})", e.kind()),
            };
            error!("{} at {}", msg, path.display());
            return Err(msg);
        }
    };

    serde_json::from_str::<AssignmentSet>(&s).map_err(|e| {
        error!("invalid assignment set JSON at {}: {}", path.display(), e);
        "Invalid assignment set JSON".to_string()
    })
}

/// Save assignments.json for a lesson (atomic-ish write).
pub fn save_assignment_set(
    course: &str,
    lesson: &str,
    set: &AssignmentSet,
) -> Result<(), String> {
    use std::io::ErrorKind;

    let dir = lesson_dir(course, lesson);
    ensure_dir(&dir).map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => "Permission denied creating lesson directory".to_string(),
        _ => "Failed to prepare lesson directory".to_string(),
    })?;

    let path = assignment_set_path(course, lesson);
    let pretty = serde_json::to_string_pretty(set)
        .map_err(|_| "Failed to serialize assignment set".to_string())?;

    let tmp = temp_path(&path);
    {
        let mut f = fs::File::create(&tmp).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => "Permission denied creating temp file".to_string(),
            _ => "Failed to create temp file".to_string(),
        })?;
        f.write_all(pretty.as_bytes())
            .map_err(|_| "Failed to write temp file".to_string())?;
        f.flush().map_err(|_| "Failed to flush temp file".to_string())?;
    }
    fs::rename(&tmp, &path).map_err(|_| "Failed to move temp file into place".to_string())?;
    Ok(())
}

fn temp_path(final_path: &PathBuf) -> PathBuf {
    let mut tmp = final_path.clone();
    let fname = final_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("assignments.json");
    tmp.set_file_name(format!("{fname}.tmp"));
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use serial_test::serial;

    fn sample_set() -> AssignmentSet {
        AssignmentSet::new_now(
            "python-fundamentals-variables",
            vec![
                Assignment {
                    name: "precip_int".to_string(),
                    kind: AssignmentKind::Integer { expected: Some(46) },
                    hint: Some(
                        "Make sure you assigned the value of precip_int to be a whole number \
                         closest to the average annual rainfall in NYC."
                            .to_string(),
                    ),
                },
                Assignment {
                    name: "location".to_string(),
                    kind: AssignmentKind::Text {
                        expected: Some("New York City".to_string()),
                    },
                    hint: None,
                },
            ],
        )
    }

    #[test]
    fn test_find_by_name() {
        let set = sample_set();
        assert!(set.find("precip_int").is_some());
        assert!(set.find("precip_float").is_none());
    }

    #[test]
    fn test_kind_deserializes_flattened() {
        let json = r#"{
            "name": "precip_by_location",
            "kind": "sequence",
            "length": 3,
            "element_at": { "index": 2, "element_type": "text" },
            "contains": ["text", "float"]
        }"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        match &a.kind {
            AssignmentKind::Sequence {
                length,
                element_at,
                contains,
            } => {
                assert_eq!(*length, Some(3));
                assert_eq!(element_at.unwrap().index, 2);
                assert_eq!(contains, &vec![TypeTag::Text, TypeTag::Float]);
            }
            other => panic!("expected sequence kind, got {other:?}"),
        }
        assert_eq!(a.kind.target_tag(), TypeTag::Sequence);
    }

    #[test]
    fn test_expected_values_deserialize() {
        let json = r#"{
            "name": "precip_by_location",
            "kind": "sequence_equals",
            "expected": [
                { "type": "integer", "value": 1 },
                { "type": "float", "value": 20.23 },
                { "type": "text", "value": "inches" }
            ]
        }"#;
        let a: Assignment = serde_json::from_str(json).unwrap();
        match &a.kind {
            AssignmentKind::SequenceEquals { expected, .. } => {
                assert_eq!(expected.len(), 3);
                assert_eq!(expected[0], Value::Integer(1));
            }
            other => panic!("expected sequence_equals kind, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        AppConfig::override_lesson_storage_root(dir.path().to_str().unwrap());

        let set = sample_set();
        save_assignment_set("python-fundamentals", "variables", &set).unwrap();
        let loaded = load_assignment_set("python-fundamentals", "variables").unwrap();
        assert_eq!(set, loaded);
    }

    #[test]
    #[serial]
    fn test_load_missing_set() {
        let dir = tempfile::tempdir().unwrap();
        AppConfig::override_lesson_storage_root(dir.path().to_str().unwrap());

        let err = load_assignment_set("python-fundamentals", "no-such-lesson").unwrap_err();
        assert_eq!(err, "Assignment set not found");
    }
}
