//! The lint engine seam.
//!
//! The JavaScript lexer/parser/rule engine lives outside this crate.
//! `Linter` is the thin interface the check runner drives; `CommandEngine`
//! adapts an external engine process that reads source text on stdin and
//! writes a JSON issue report on stdout.

use crate::models::options::LintOptions;
use crate::models::Issue;
use crate::util;
use serde_json::Value as Json;
use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors from driving the external engine.
pub enum EngineError {
    #[error("failed to start lint engine '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error talking to lint engine: {0}")]
    Io(#[from] std::io::Error),
    #[error("lint engine produced an unreadable report: {0}")]
    Report(String),
}

/// Thin interface to the embedded lint engine.
pub trait Linter {
    /// Lint one source text under the given name, returning its issues in
    /// engine order.
    fn lint(&self, name: &str, source: &str) -> Result<Vec<Issue>, EngineError>;
}

/// Adapter around an external engine executable.
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
    options: LintOptions,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>, args: Vec<String>, options: LintOptions) -> Self {
        CommandEngine {
            program: program.into(),
            args,
            options,
        }
    }

    /// Full argument list for one invocation: configured args first, then
    /// the rendered options.
    fn invocation_args(&self) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend(self.options.to_args());
        args
    }
}

impl Linter for CommandEngine {
    fn lint(&self, name: &str, source: &str) -> Result<Vec<Issue>, EngineError> {
        let mut child = Command::new(&self.program)
            .args(self.invocation_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| EngineError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;
        // The engine must see EOF on stdin before emitting its report, so
        // the handle is dropped as soon as the source is written.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes())?;
        }
        let stdout = match child.stdout.take() {
            Some(s) => s,
            None => return Err(EngineError::Report("engine stdout was not captured".into())),
        };
        let raw = util::reader_to_string(stdout)?;
        let status = child.wait()?;
        // A nonzero exit is how lint engines signal findings; only an
        // unparseable report is an error.
        let report: Json = serde_json::from_str(&raw).map_err(|e| {
            EngineError::Report(format!(
                "engine '{}' exited with {} and its output was not a JSON report: {}",
                self.program, status, e
            ))
        })?;
        Ok(decode_report(name, &report))
    }
}

/// Decode the engine's dynamic report into issues for `name`.
///
/// Accepts either a bare array of issue objects or an object carrying an
/// `issues` array. Missing fields fall back to defaults rather than
/// failing the file.
pub fn decode_report(name: &str, report: &Json) -> Vec<Issue> {
    let entries: Vec<Json> = match report {
        Json::Array(items) => items.clone(),
        Json::Object(_) => util::list_value(report, "issues"),
        _ => Vec::new(),
    };
    entries
        .iter()
        .filter_map(|entry| decode_issue(name, entry))
        .collect()
}

fn decode_issue(name: &str, entry: &Json) -> Option<Issue> {
    // Engines that stop early leave a trailing null in the issue array.
    if !entry.is_object() {
        return None;
    }
    let reason =
        util::string_value(entry, "reason").or_else(|| util::string_value(entry, "message"))?;
    Some(Issue {
        file: name.to_string(),
        line: util::int_value(entry, "line").max(0) as u32,
        character: util::int_value(entry, "character").max(0) as u32,
        reason,
        evidence: util::string_value(entry, "evidence"),
    })
}
