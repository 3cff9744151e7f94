use serde::{Deserialize, Serialize};
use std::fs;

use crate::paths::{ensure_parent_dir, lesson_config_path};

/// How assembled feedback is rendered.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportScheme {
    Plain,
    Annotated,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckOptions {
    /// If true, a boolean never satisfies an integer expectation. The
    /// lenient host-language behavior is available by setting this false.
    #[serde(default = "default_strict_booleans")]
    pub strict_booleans: bool,

    /// Relative tolerance for approximate array comparisons.
    #[serde(default = "default_rel_tolerance")]
    pub rel_tolerance: f64,

    /// Absolute tolerance for approximate array comparisons.
    #[serde(default = "default_abs_tolerance")]
    pub abs_tolerance: f64,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            strict_booleans: default_strict_booleans(),
            rel_tolerance: default_rel_tolerance(),
            abs_tolerance: default_abs_tolerance(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputOptions {
    #[serde(default = "default_report_scheme")]
    pub report_scheme: ReportScheme,

    /// If true, value/shape failure lines echo the candidate's actual value.
    #[serde(default = "default_show_values")]
    pub show_values: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            report_scheme: default_report_scheme(),
            show_values: default_show_values(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LessonConfig {
    #[serde(default)]
    pub checks: CheckOptions,

    #[serde(default)]
    pub output: OutputOptions,
}

impl LessonConfig {
    pub fn default_config() -> Self {
        LessonConfig {
            checks: CheckOptions::default(),
            output: OutputOptions::default(),
        }
    }

    pub fn get_lesson_config(course: &str, lesson: &str) -> Result<Self, String> {
        let path = lesson_config_path(course, lesson);
        let file_contents = fs::read_to_string(&path)
            .map_err(|_| format!("Failed to read config file at {path:?}"))?;

        serde_json::from_str(&file_contents).map_err(|_| "Invalid config JSON format".to_string())
    }

    pub fn save(&self, course: &str, lesson: &str) -> Result<(), String> {
        let path = lesson_config_path(course, lesson);
        if let Err(e) = ensure_parent_dir(&path) {
            return Err(format!("Failed to create lesson directory: {e:?}"));
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config to JSON: {e}"))?;

        fs::write(&path, json).map_err(|e| format!("Failed to write config file to disk: {e:?}"))?;

        Ok(())
    }
}

// Default Functions

fn default_strict_booleans() -> bool {
    true
}

fn default_rel_tolerance() -> f64 {
    1e-5
}

fn default_abs_tolerance() -> f64 {
    1e-8
}

fn default_report_scheme() -> ReportScheme {
    ReportScheme::Plain
}

fn default_show_values() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let cfg = LessonConfig::default_config();
        assert!(cfg.checks.strict_booleans);
        assert_eq!(cfg.checks.rel_tolerance, 1e-5);
        assert_eq!(cfg.checks.abs_tolerance, 1e-8);
        assert_eq!(cfg.output.report_scheme, ReportScheme::Plain);
        assert!(cfg.output.show_values);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: LessonConfig =
            serde_json::from_str(r#"{ "output": { "report_scheme": "annotated" } }"#).unwrap();
        assert_eq!(cfg.output.report_scheme, ReportScheme::Annotated);
        assert!(cfg.output.show_values);
        assert!(cfg.checks.strict_booleans);
    }

    #[test]
    #[serial]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        AppConfig::override_lesson_storage_root(dir.path().to_str().unwrap());

        let mut cfg = LessonConfig::default_config();
        cfg.checks.strict_booleans = false;
        cfg.output.report_scheme = ReportScheme::Annotated;
        cfg.save("python-fundamentals", "operators").unwrap();

        let loaded = LessonConfig::get_lesson_config("python-fundamentals", "operators").unwrap();
        assert!(!loaded.checks.strict_booleans);
        assert_eq!(loaded.output.report_scheme, ReportScheme::Annotated);
    }

    #[test]
    #[serial]
    fn test_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        AppConfig::override_lesson_storage_root(dir.path().to_str().unwrap());

        assert!(LessonConfig::get_lesson_config("python-fundamentals", "nowhere").is_err());
    }
}
