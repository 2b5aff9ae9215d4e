//! Sequential check runner.
//!
//! Walks the configured source tree, feeds each matched file through the
//! lint engine one at a time, and aggregates per-file issue counts into a
//! `CheckReport`. One file is fully read, linted, and released before the
//! next begins.

use crate::config::Effective;
use crate::engine::{EngineError, Linter};
use crate::models::{CheckReport, FileReport, Summary};
use crate::walk;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
/// Hard failures that abort the run.
///
/// A nonzero issue count is not an error: it is carried in the
/// `CheckReport` summary and mapped to the exit code by the caller.
pub enum CheckError {
    #[error("error listing files under {}: {source}", dir.display())]
    List {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("problem whilst reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8 text", path.display())]
    Encoding { path: PathBuf },
    #[error("problem whilst linting {}: {source}", path.display())]
    Engine {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
}

/// Run the check over the effective configuration with the given engine.
///
/// A missing source directory is not an error: the run is skipped with a
/// warning and an empty report, so an absent source tree never fails the
/// build.
pub fn run_check(eff: &Effective, engine: &dyn Linter) -> Result<CheckReport, CheckError> {
    if !eff.source_dir.exists() {
        warn!("{} does not exist", eff.source_dir.display());
        return Ok(CheckReport::empty());
    }

    debug!("includes={:?}", eff.includes);
    debug!("excludes={:?}", eff.excludes);
    let files = walk::list_files(&eff.source_dir, &eff.includes, &eff.excludes).map_err(|e| {
        CheckError::List {
            dir: eff.source_dir.clone(),
            source: e,
        }
    })?;
    debug!("files={:?}", files);

    let mut reports = Vec::with_capacity(files.len());
    let mut issue_count = 0usize;
    for rel in &files {
        let path = eff.source_dir.join(rel);
        let report = lint_file(&path, engine)?;
        issue_count += report.issues.len();
        reports.push(report);
    }

    let summary = Summary {
        issues: issue_count,
        files: reports.len(),
    };
    Ok(CheckReport {
        files: reports,
        summary,
    })
}

/// Read one file and run it through the engine.
fn lint_file(path: &Path, engine: &dyn Linter) -> Result<FileReport, CheckError> {
    debug!("lint {}", path.display());
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        // JavaScript sources are expected to always be UTF-8; keep the
        // failure distinct if one is not.
        io::ErrorKind::InvalidData => CheckError::Encoding {
            path: path.to_path_buf(),
        },
        _ => CheckError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let name = path.to_string_lossy().to_string();
    let issues = engine.lint(&name, &source).map_err(|e| CheckError::Engine {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(FileReport { file: name, issues })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_INCLUDES;
    use crate::models::options::LintOptions;
    use crate::models::Issue;
    use tempfile::tempdir;

    /// Flags every line containing `alert` as one issue.
    struct StubEngine;

    impl Linter for StubEngine {
        fn lint(&self, name: &str, source: &str) -> Result<Vec<Issue>, EngineError> {
            Ok(source
                .lines()
                .enumerate()
                .filter(|(_, l)| l.contains("alert"))
                .map(|(i, l)| Issue {
                    file: name.to_string(),
                    line: (i + 1) as u32,
                    character: (l.find("alert").unwrap_or(0) + 1) as u32,
                    reason: "'alert' was used before it was defined.".to_string(),
                    evidence: Some(l.to_string()),
                })
                .collect())
        }
    }

    fn effective_for(root: &Path) -> Effective {
        Effective {
            repo_root: root.to_path_buf(),
            source_dir: root.join("web"),
            source_configured: true,
            includes: DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect(),
            excludes: Vec::new(),
            output: "human".to_string(),
            engine_command: "unused".to_string(),
            engine_args: Vec::new(),
            options: LintOptions::default(),
        }
    }

    #[test]
    fn test_summary_equals_sum_of_per_file_counts() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("web/sub")).unwrap();
        fs::write(root.join("web/a.js"), "alert('x');\nvar y;\nalert(y);\n").unwrap();
        fs::write(root.join("web/sub/b.js"), "alert('z');\n").unwrap();
        fs::write(root.join("web/clean.js"), "var ok;\n").unwrap();
        fs::write(root.join("web/notes.txt"), "alert here does not count\n").unwrap();

        let report = run_check(&effective_for(root), &StubEngine).unwrap();
        assert_eq!(report.summary.files, 3);
        assert_eq!(report.summary.issues, 3);
        let per_file: usize = report.files.iter().map(|f| f.issues.len()).sum();
        assert_eq!(report.summary.issues, per_file);
    }

    #[test]
    fn test_files_processed_in_sorted_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("web")).unwrap();
        fs::write(root.join("web/b.js"), "var b;\n").unwrap();
        fs::write(root.join("web/a.js"), "var a;\n").unwrap();

        let report = run_check(&effective_for(root), &StubEngine).unwrap();
        let names: Vec<PathBuf> = report.files.iter().map(|f| PathBuf::from(&f.file)).collect();
        assert_eq!(names, vec![root.join("web/a.js"), root.join("web/b.js")]);
    }

    #[test]
    fn test_missing_source_dir_is_empty_not_error() {
        let dir = tempdir().unwrap();
        let report = run_check(&effective_for(dir.path()), &StubEngine).unwrap();
        assert_eq!(report.summary.files, 0);
        assert_eq!(report.summary.issues, 0);
        assert!(report.files.is_empty());
    }

    #[test]
    fn test_excludes_remove_matches() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("web/vendor")).unwrap();
        fs::write(root.join("web/a.js"), "alert(1);\n").unwrap();
        fs::write(root.join("web/vendor/lib.js"), "alert(2);\n").unwrap();

        let mut eff = effective_for(root);
        eff.excludes = vec!["**/vendor/**".to_string()];
        let report = run_check(&eff, &StubEngine).unwrap();
        assert_eq!(report.summary.files, 1);
        assert_eq!(report.summary.issues, 1);
    }

    #[test]
    fn test_engine_failure_aborts_run() {
        struct FailingEngine;
        impl Linter for FailingEngine {
            fn lint(&self, _: &str, _: &str) -> Result<Vec<Issue>, EngineError> {
                Err(EngineError::Report("boom".to_string()))
            }
        }

        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("web")).unwrap();
        fs::write(root.join("web/a.js"), "var a;\n").unwrap();

        let err = run_check(&effective_for(root), &FailingEngine).unwrap_err();
        assert!(matches!(err, CheckError::Engine { .. }));
    }
}
