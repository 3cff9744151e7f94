//! Check for plot candidates: plot kind plus keyword groups for the title and
//! axis labels.
//!
//! Each keyword group is a set of accepted alternatives ("mm" or
//! "millimeters"); every group must be present somewhere in the text for the
//! line to pass. Matching is case-insensitive substring matching.

use crate::traits::check::Check;
use crate::types::CheckOutcome;
use regex::Regex;
use util::assignment::{Assignment, AssignmentKind};
use util::lesson_config::LessonConfig;
use util::value::Value;

pub struct PlotCheck;

fn contains_keyword(text: &str, word: &str) -> bool {
    match Regex::new(&format!("(?i){}", regex::escape(word))) {
        Ok(re) => re.is_match(text),
        Err(_) => false,
    }
}

/// One outcome for a label: passes when every group has at least one
/// alternative present in `text`. `None` when no groups were authored.
fn keyword_outcome(location: &str, text: &str, groups: &[Vec<String>]) -> Option<CheckOutcome> {
    if groups.is_empty() {
        return None;
    }

    let missing: Vec<&str> = groups
        .iter()
        .filter(|group| !group.iter().any(|word| contains_keyword(text, word)))
        .filter_map(|group| group.first().map(String::as_str))
        .collect();

    Some(if missing.is_empty() {
        CheckOutcome::passed(format!(
            "Plot has all of the needed keywords in the {location}."
        ))
    } else {
        CheckOutcome::failed(format!(
            "Please make sure that the {location} contains all needed keywords \
             specified in the instructions (missing: {}).",
            missing.join(", ")
        ))
    })
}

impl Check for PlotCheck {
    fn evaluate(
        &self,
        assignment: &Assignment,
        candidate: &Value,
        _config: &LessonConfig,
    ) -> Vec<CheckOutcome> {
        let AssignmentKind::Plot {
            kind,
            title_keywords,
            x_keywords,
            y_keywords,
        } = &assignment.kind
        else {
            return Vec::new();
        };

        let name = &assignment.name;
        let mut outcomes = Vec::new();

        let Value::Plot(info) = candidate else {
            outcomes.push(CheckOutcome::failed(format!(
                "Variable '{name}' does not look like a plot. Make sure you copied the \
                 plotting code into the cell above correctly."
            )));
            outcomes.push(CheckOutcome::skipped(format!(
                "Skipped the plot checks for '{name}' because it is not a plot."
            )));
            return outcomes;
        };

        if let Some(expected_kind) = kind {
            if info.kind.eq_ignore_ascii_case(expected_kind) {
                outcomes.push(CheckOutcome::passed(format!(
                    "Plot is a {expected_kind} type."
                )));
            } else {
                outcomes.push(CheckOutcome::failed(format!(
                    "Plot is not a {expected_kind} type, make sure that the original code \
                     you copied wasn't modified to change the plot type!"
                )));
            }
        }

        if let Some(outcome) = keyword_outcome("title", &info.title, title_keywords) {
            outcomes.push(outcome);
        }
        if let Some(outcome) = keyword_outcome("x axis label", &info.x_label, x_keywords) {
            outcomes.push(outcome);
        }
        if let Some(outcome) = keyword_outcome("y axis label", &info.y_label, y_keywords) {
            outcomes.push(outcome);
        }

        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckStatus;
    use util::value::PlotInfo;

    fn groups(words: &[&[&str]]) -> Vec<Vec<String>> {
        words
            .iter()
            .map(|g| g.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    fn precip_plot_assignment() -> Assignment {
        Assignment {
            name: "ax".to_string(),
            kind: AssignmentKind::Plot {
                kind: Some("bar".to_string()),
                title_keywords: groups(&[&["Boulder"], &["average", "mean"], &["month"], &["precip"]]),
                x_keywords: groups(&[&["month"]]),
                y_keywords: groups(&[&["precip"], &["mm", "millimeters"]]),
            },
            hint: None,
        }
    }

    fn good_plot() -> Value {
        Value::Plot(PlotInfo {
            kind: "bar".to_string(),
            title: "Average Monthly Precipitation in Boulder".to_string(),
            x_label: "Month".to_string(),
            y_label: "Precipitation (mm)".to_string(),
        })
    }

    #[test]
    fn test_fully_correct_plot() {
        let outcomes = PlotCheck.evaluate(
            &precip_plot_assignment(),
            &good_plot(),
            &LessonConfig::default_config(),
        );
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|o| o.status == CheckStatus::Passed));
        assert_eq!(outcomes[0].message, "Plot is a bar type.");
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let plot = Value::Plot(PlotInfo {
            kind: "bar".to_string(),
            title: "BOULDER MEAN MONTHLY PRECIP".to_string(),
            x_label: "month".to_string(),
            y_label: "precip (MILLIMETERS)".to_string(),
        });
        let outcomes = PlotCheck.evaluate(
            &precip_plot_assignment(),
            &plot,
            &LessonConfig::default_config(),
        );
        assert!(outcomes.iter().all(|o| o.status == CheckStatus::Passed));
    }

    #[test]
    fn test_missing_title_group_is_named() {
        let plot = Value::Plot(PlotInfo {
            kind: "bar".to_string(),
            title: "Average Monthly Precipitation".to_string(), // no "Boulder"
            x_label: "Month".to_string(),
            y_label: "Precipitation (mm)".to_string(),
        });
        let outcomes = PlotCheck.evaluate(
            &precip_plot_assignment(),
            &plot,
            &LessonConfig::default_config(),
        );
        assert_eq!(outcomes[1].status, CheckStatus::Failed);
        assert!(outcomes[1].message.contains("missing: Boulder"));
        // The other three lines are unaffected.
        assert_eq!(outcomes[0].status, CheckStatus::Passed);
        assert_eq!(outcomes[2].status, CheckStatus::Passed);
        assert_eq!(outcomes[3].status, CheckStatus::Passed);
    }

    #[test]
    fn test_any_alternative_in_a_group_counts() {
        let plot = Value::Plot(PlotInfo {
            kind: "bar".to_string(),
            title: "Boulder mean monthly precip".to_string(), // "mean" instead of "average"
            x_label: "Month".to_string(),
            y_label: "precip in millimeters".to_string(), // "millimeters" instead of "mm"
        });
        let outcomes = PlotCheck.evaluate(
            &precip_plot_assignment(),
            &plot,
            &LessonConfig::default_config(),
        );
        assert!(outcomes.iter().all(|o| o.status == CheckStatus::Passed));
    }

    #[test]
    fn test_wrong_plot_kind() {
        let plot = Value::Plot(PlotInfo {
            kind: "line".to_string(),
            title: "Boulder average monthly precip".to_string(),
            x_label: "Month".to_string(),
            y_label: "precip (mm)".to_string(),
        });
        let outcomes = PlotCheck.evaluate(
            &precip_plot_assignment(),
            &plot,
            &LessonConfig::default_config(),
        );
        assert_eq!(outcomes[0].status, CheckStatus::Failed);
        assert!(outcomes[0].message.contains("not a bar type"));
    }

    #[test]
    fn test_non_plot_candidate() {
        let outcomes = PlotCheck.evaluate(
            &precip_plot_assignment(),
            &Value::Integer(0),
            &LessonConfig::default_config(),
        );
        assert_eq!(outcomes[0].status, CheckStatus::Failed);
        assert!(outcomes[0].message.contains("does not look like a plot"));
        assert_eq!(outcomes[1].status, CheckStatus::Skipped);
    }
}
