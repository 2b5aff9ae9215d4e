//! Shared data models for check results and engine options.

pub mod options;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single lint finding with location, message, and evidence.
pub struct Issue {
    pub file: String,
    /// 1-based source line.
    pub line: u32,
    /// 1-based column of the offending character.
    pub character: u32,
    pub reason: String,
    /// The offending source line, when the engine supplies it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
/// Ordered issues for one processed source file.
pub struct FileReport {
    pub file: String,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Copy, Serialize)]
/// Aggregated counts used by printers and exit-code decisions.
pub struct Summary {
    pub issues: usize,
    pub files: usize,
}

#[derive(Debug, Clone, Serialize)]
/// Check results container.
pub struct CheckReport {
    pub files: Vec<FileReport>,
    pub summary: Summary,
}

impl CheckReport {
    /// Report for a run that processed no files at all.
    pub fn empty() -> Self {
        CheckReport {
            files: Vec::new(),
            summary: Summary {
                issues: 0,
                files: 0,
            },
        }
    }
}
