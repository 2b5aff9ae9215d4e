//! File discovery under the source directory.
//!
//! Each candidate file's path relative to the source root is matched
//! against include and exclude globs. `*` does not cross path separators;
//! `**` does. An exclude always wins over a matching include.

use glob::{MatchOptions, Pattern};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Exclude patterns applied to every run in addition to configured ones.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "**/.git/**",
    "**/.svn/**",
    "**/.hg/**",
    "**/CVS/**",
    "**/node_modules/**",
];

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// True when `rel` matches `pattern`.
///
/// A pattern starting with `**/` also matches a bare relative path with no
/// directory prefix, so `**/*.js` covers a top-level `a.js`.
fn matches(pattern: &Pattern, rel: &Path) -> bool {
    let opts = match_options();
    if pattern.matches_path_with(rel, opts) {
        return true;
    }
    if let Some(tail) = pattern.as_str().strip_prefix("**/") {
        if let Ok(p) = Pattern::new(tail) {
            return p.matches_path_with(rel, opts);
        }
    }
    false
}

fn compile(patterns: &[String]) -> io::Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("bad glob pattern '{}': {}", p, e),
                )
            })
        })
        .collect()
}

/// List files under `source_dir` matching any include and no exclude.
///
/// Returned paths are relative to `source_dir` and sorted. Only regular
/// files are candidates; directories never match directly.
pub fn list_files(
    source_dir: &Path,
    includes: &[String],
    excludes: &[String],
) -> io::Result<Vec<PathBuf>> {
    let includes = compile(includes)?;
    let mut all_excludes: Vec<String> = excludes.to_vec();
    all_excludes.extend(DEFAULT_EXCLUDES.iter().map(|s| s.to_string()));
    let excludes = compile(&all_excludes)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(source_dir) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = match entry.path().strip_prefix(source_dir) {
            Ok(r) => r.to_path_buf(),
            Err(_) => continue,
        };
        if includes.iter().any(|p| matches(p, &rel)) && !excludes.iter().any(|p| matches(p, &rel))
        {
            files.push(rel);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "var x;\n").unwrap();
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_include_matches_all_js() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "a.js");
        touch(root, "sub/b.js");
        touch(root, "sub/deep/c.js");
        touch(root, "sub/readme.txt");

        let files = list_files(root, &strings(&["**/*.js"]), &[]).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("a.js"),
                PathBuf::from("sub/b.js"),
                PathBuf::from("sub/deep/c.js"),
            ]
        );
    }

    #[test]
    fn test_single_star_does_not_cross_separators() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "a.js");
        touch(root, "sub/b.js");

        let files = list_files(root, &strings(&["*.js"]), &[]).unwrap();
        assert_eq!(files, vec![PathBuf::from("a.js")]);
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "a.js");
        touch(root, "vendor/lib.js");

        let files = list_files(
            root,
            &strings(&["**/*.js"]),
            &strings(&["vendor/**"]),
        )
        .unwrap();
        assert_eq!(files, vec![PathBuf::from("a.js")]);
    }

    #[test]
    fn test_builtin_excludes_always_apply() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "a.js");
        touch(root, "node_modules/dep/index.js");
        touch(root, ".git/hooks/hook.js");

        let files = list_files(root, &strings(&["**/*.js"]), &[]).unwrap();
        assert_eq!(files, vec![PathBuf::from("a.js")]);
    }

    #[test]
    fn test_bad_pattern_is_an_error() {
        let dir = tempdir().unwrap();
        let err = list_files(dir.path(), &strings(&["[unclosed"]), &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
