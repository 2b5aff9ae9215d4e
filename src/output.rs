//! Output rendering for the check command.
//!
//! Supports `human` (default) and `json` outputs. The human form prints
//! each issue with its offending line and a caret under the offending
//! column; the JSON form serializes the whole report with its summary.

use crate::models::{CheckReport, Issue};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Colored `error:` prefix for CLI-boundary messages.
pub fn error_prefix() -> String {
    if std::env::var_os("NO_COLOR").is_none() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Colored `note:` prefix for advisory messages.
pub fn note_prefix() -> String {
    if std::env::var_os("NO_COLOR").is_none() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// The caret line: `character - 1` spaces, then a `^` under the offending
/// column. Columns are 1-based; 0 clamps to no padding.
pub fn caret_line(character: u32) -> String {
    let pad = character.saturating_sub(1) as usize;
    format!("{}^", " ".repeat(pad))
}

/// Path as shown to a human: relative to the current directory when the
/// issue carries an absolute path underneath it.
fn display_path(file: &str) -> String {
    let p = Path::new(file);
    if !p.is_absolute() {
        return file.to_string();
    }
    match std::env::current_dir()
        .ok()
        .and_then(|cwd| pathdiff::diff_paths(p, cwd))
    {
        Some(rel) if !rel.as_os_str().is_empty() && !rel.starts_with("..") => {
            rel.to_string_lossy().to_string()
        }
        _ => file.to_string(),
    }
}

/// Print check results in the requested format.
pub fn print_check(report: &CheckReport, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for file in &report.files {
                for issue in &file.issues {
                    print_issue(issue, color);
                }
            }
            let summary = format!(
                "— Summary — issues={} files={}",
                report.summary.issues, report.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

fn print_issue(issue: &Issue, color: bool) {
    let location = format!(
        "{}:{}:{}",
        display_path(&issue.file),
        issue.line,
        issue.character
    );
    if color {
        println!("{}: {}", location.bold(), issue.reason);
    } else {
        println!("{}: {}", location, issue.reason);
    }
    if let Some(evidence) = &issue.evidence {
        println!("{}", evidence);
        let caret = caret_line(issue.character);
        if color {
            println!("{}", caret.red().to_string());
        } else {
            println!("{}", caret);
        }
    }
}

/// Compose the check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(report: &CheckReport) -> JsonVal {
    // Directly serialize CheckReport as JSON, keeping stable shape
    serde_json::to_value(report).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileReport, Summary};

    #[test]
    fn test_caret_padding_is_character_minus_one() {
        assert_eq!(caret_line(1), "^");
        assert_eq!(caret_line(5), "    ^");
        assert_eq!(caret_line(5).chars().filter(|c| *c == ' ').count(), 4);
    }

    #[test]
    fn test_caret_clamps_at_zero() {
        assert_eq!(caret_line(0), "^");
    }

    #[test]
    fn test_compose_check_json_shape() {
        let report = CheckReport {
            files: vec![FileReport {
                file: "web/a.js".into(),
                issues: vec![Issue {
                    file: "web/a.js".into(),
                    line: 2,
                    character: 7,
                    reason: "missing semicolon".into(),
                    evidence: Some("var x = 1".into()),
                }],
            }],
            summary: Summary { issues: 1, files: 1 },
        };
        let out = compose_check_json(&report);
        assert_eq!(out["summary"]["issues"], 1);
        assert_eq!(out["summary"]["files"], 1);
        assert_eq!(out["files"][0]["issues"][0]["character"], 7);
        assert_eq!(out["files"][0]["issues"][0]["evidence"], "var x = 1");
    }

    #[test]
    fn test_compose_check_json_omits_absent_evidence() {
        let report = CheckReport {
            files: vec![FileReport {
                file: "a.js".into(),
                issues: vec![Issue {
                    file: "a.js".into(),
                    line: 1,
                    character: 1,
                    reason: "stopping".into(),
                    evidence: None,
                }],
            }],
            summary: Summary { issues: 1, files: 1 },
        };
        let out = compose_check_json(&report);
        assert!(out["files"][0]["issues"][0]["evidence"].is_null());
    }
}
