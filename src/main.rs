//! jscheck CLI binary entry point.
//! Delegates to modules for discovery/lint/reporting and prints results.

mod check;
mod cli;
mod config;
mod engine;
mod models;
mod output;
mod util;
mod walk;

use clap::Parser;
use cli::{Cli, Commands};
use engine::CommandEngine;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            repo_root,
            source_dir,
            includes,
            excludes,
            output,
            engine,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                source_dir.as_deref(),
                &includes,
                &excludes,
                output.as_deref(),
                engine.as_deref(),
            );
            // Require a source directory to be configured (no default)
            if !eff.source_configured {
                eprintln!(
                    "{} {}",
                    output::error_prefix(),
                    "Source directory is not configured. Pass --source-dir or add jscheck.toml."
                );
                std::process::exit(2);
            }
            // Friendly note if no jscheck config was found
            if config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    output::note_prefix(),
                    "No jscheck.toml found; using defaults."
                );
            }
            let linter = CommandEngine::new(
                eff.engine_command.clone(),
                eff.engine_args.clone(),
                eff.options.clone(),
            );
            let report = match check::run_check(&eff, &linter) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{} {}", output::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            output::print_check(&report, &eff.output);
            if report.summary.issues > 0 {
                eprintln!(
                    "{} found {} problems in {} files",
                    output::error_prefix(),
                    report.summary.issues,
                    report.summary.files
                );
                std::process::exit(1);
            }
        }
    }
}
