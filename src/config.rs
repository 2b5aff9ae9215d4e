//! Configuration discovery and effective settings resolution.
//!
//! jscheck reads `jscheck.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `includes`: `["**/*.js"]`
//! - `excludes`: none beyond the built-in VCS/vendor set
//! - `output`: `human`
//! - `engine.command`: `jslint`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::models::options::LintOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Include patterns applied when neither CLI nor config provides any.
pub const DEFAULT_INCLUDES: &[&str] = &["**/*.js"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Engine invocation section under `[engine]`.
pub struct EngineCfg {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `jscheck.toml|yaml`.
pub struct JscheckConfig {
    pub source_dir: Option<String>,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
    pub output: Option<String>,
    #[serde(default)]
    pub engine: Option<EngineCfg>,
    #[serde(default)]
    pub options: Option<LintOptions>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the check command after applying
/// precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Joined against `repo_root` when configured as a relative path.
    pub source_dir: PathBuf,
    pub source_configured: bool,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub output: String,
    pub engine_command: String,
    pub engine_args: Vec<String>,
    pub options: LintOptions,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `jscheck.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("jscheck.toml").exists()
            || cur.join("jscheck.yaml").exists()
            || cur.join("jscheck.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `JscheckConfig` from `jscheck.toml` or `jscheck.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<JscheckConfig> {
    let toml_path = root.join("jscheck.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: JscheckConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["jscheck.yaml", "jscheck.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: JscheckConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_source_dir: Option<&str>,
    cli_includes: &[String],
    cli_excludes: &[String],
    cli_output: Option<&str>,
    cli_engine: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let source_src = cli_source_dir.map(|s| s.to_string()).or(cfg.source_dir);
    let (source_dir, source_configured) = match source_src {
        Some(s) => {
            let p = PathBuf::from(&s);
            let abs = if p.is_absolute() { p } else { repo_root.join(p) };
            (abs, true)
        }
        None => (PathBuf::new(), false),
    };

    let mut includes = if cli_includes.is_empty() {
        cfg.includes.unwrap_or_default()
    } else {
        cli_includes.to_vec()
    };
    if includes.is_empty() {
        includes = DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect();
    }

    let excludes = if cli_excludes.is_empty() {
        cfg.excludes.unwrap_or_default()
    } else {
        cli_excludes.to_vec()
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let engine_cfg = cfg.engine.unwrap_or_default();
    let engine_command = cli_engine
        .map(|s| s.to_string())
        .or(engine_cfg.command)
        .unwrap_or_else(|| "jslint".to_string());
    let engine_args = engine_cfg.args.unwrap_or_default();

    let options = cfg.options.unwrap_or_default();

    Effective {
        repo_root,
        source_dir,
        source_configured,
        includes,
        excludes,
        output,
        engine_command,
        engine_args,
        options,
    }
}
