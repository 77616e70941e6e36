#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! projectbrief - summaries of zipped software projects
//!
//! This library unpacks a zip archive containing a software project and
//! describes it in a short text brief: project name, README excerpt,
//! languages, dependency manifests, folder layout and a hint on how to run it.
//!
//! ## Features
//! - Per-call scratch workspaces, removed when the analysis ends
//! - Archive entries that would escape the workspace are rejected
//! - HTTP upload endpoints (see [`api`]) and a command-line tool
//!
//! ## Usage
//! ```rust,no_run
//! use projectbrief::analyzer::ArchiveAnalyzer;
//! use std::path::Path;
//!
//! fn example() -> projectbrief::Result<()> {
//!     let summary = ArchiveAnalyzer::default().analyze(Path::new("project.zip"))?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```

/// Archive analysis pipeline
pub mod analyzer;
/// HTTP upload endpoints
pub mod api;
/// Configuration module for the application
pub mod config;
/// Error handling types and utilities
pub mod error;
/// Logging configuration for the command-line tool
pub mod logging;
/// Path helpers
pub mod utils;

// Re-export common types
pub use analyzer::{analyze_zip_file, ArchiveAnalyzer, ProjectSummary};
pub use config::Config;
pub use error::{AnalyzerError, Result};
