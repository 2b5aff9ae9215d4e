//! jscheck core library.
//!
//! This crate exposes programmatic APIs for discovering JavaScript sources
//! under a directory and running each one through an external lint engine.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `check`: Sequential check runner producing a `CheckReport`.
//! - `engine`: The `Linter` seam and the external-process adapter.
//! - `models`: Data models for issues, reports, and engine options.
//! - `output`: Human/JSON printers for check reports.
//! - `util`: Typed extraction from dynamic engine values.
//! - `walk`: Include/exclude file discovery under the source directory.
//!
//! Note: All documentation comments are written in English by convention.
pub mod check;
pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod output;
pub mod util;
pub mod walk;
