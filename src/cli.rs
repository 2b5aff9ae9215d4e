//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jscheck",
    version,
    about = "Lint JavaScript sources with an external engine",
    long_about = "jscheck — find JavaScript sources under a directory, run each one through a lint engine, and fail the build when issues are found.\n\nConfiguration precedence: CLI > jscheck.toml > defaults.",
    after_help = "Examples:\n  jscheck check --source-dir web/js\n  jscheck check --source-dir web/js --include '**/*.js' --exclude '**/vendor/**'\n  jscheck check --source-dir web/js --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for checking sources.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current jscheck version."
    )]
    Version,
    /// Lint JavaScript sources
    #[command(
        about = "Run lint checks",
        long_about = "Discover JavaScript files under the source directory with include/exclude globs and lint each one through the configured engine. Exits 1 when issues are found, 2 on configuration or execution errors.",
        after_help = "Examples:\n  jscheck check --source-dir web/js\n  jscheck check --source-dir web/js --output json"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(
            long,
            help = "Directory to scan for sources (required here or in jscheck.toml)"
        )]
        source_dir: Option<String>,
        #[arg(
            long = "include",
            help = "Include glob relative to the source dir (repeatable; default: **/*.js)"
        )]
        includes: Vec<String>,
        #[arg(
            long = "exclude",
            help = "Exclude glob relative to the source dir (repeatable)"
        )]
        excludes: Vec<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Lint engine command (default: jslint)")]
        engine: Option<String>,
    },
}
