// This file contains the runner module: it executes the generated suite with Jest and renders
// the summary report from Jest's JSON output.

pub mod jest;
pub mod report;
pub mod results;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::RunnerConfig;

pub use jest::{jest_command, run_jest};
pub use report::{render_discovery, render_report};
pub use results::{load_results, AssertionResult, JestResults, TestFileResult, TestStatus};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Test directory not found: {0}")]
    MissingTestDir(PathBuf),

    #[error("IO error on {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch {program}: {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Results file was not created: {0}")]
    MissingResults(PathBuf),

    #[error("Jest results file is empty: {0}")]
    EmptyResults(PathBuf),

    #[error("Failed to parse Jest results in {path}: {source}")]
    MalformedResults {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("Failed to write report: {0}")]
    ReportError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The test directory held no `*.test.js` files
    NoTests,
    Completed { failed_suites: u64, failed_tests: u64 },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            RunOutcome::NoTests => true,
            RunOutcome::Completed { failed_suites, .. } => *failed_suites == 0,
        }
    }
}

/// Sorted `*.test.js` files directly inside `dir`
pub fn discover_test_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(RunnerError::MissingTestDir(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| RunnerError::IoError {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map_or(false, |n| n.ends_with(".test.js"))
        })
        .collect();
    files.sort();

    Ok(files)
}

/// Discover, run Jest, then render the report to `out`
pub fn run_suite<W: Write>(config: &RunnerConfig, out: &mut W) -> Result<RunOutcome> {
    let files = discover_test_files(&config.test_dir)?;
    if files.is_empty() {
        warn!(dir = %config.test_dir.display(), "No test files found");
        return Ok(RunOutcome::NoTests);
    }

    render_discovery(&files, out)?;
    info!(count = files.len(), "Running generated tests");

    run_jest(config)?;
    let results = load_results(&config.results_file)?;
    render_report(&results, out)?;

    Ok(RunOutcome::Completed {
        failed_suites: results.num_failed_test_suites,
        failed_tests: results.num_failed_tests,
    })
}
