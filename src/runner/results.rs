// Model of the summary Jest writes with `--json --outputFile=...`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use super::{Result, RunnerError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Pending,
    Skipped,
    Todo,
    Disabled,
    Focused,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TestStatus {
    pub fn is_passed(self) -> bool {
        self == TestStatus::Passed
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JestResults {
    pub num_total_test_suites: u64,
    pub num_passed_test_suites: u64,
    pub num_failed_test_suites: u64,
    pub num_pending_test_suites: u64,
    pub num_total_tests: u64,
    pub num_passed_tests: u64,
    pub num_failed_tests: u64,
    pub num_pending_tests: u64,
    /// Milliseconds since the Unix epoch
    pub start_time: Option<f64>,
    pub success: bool,
    pub test_results: Vec<TestFileResult>,
}

impl JestResults {
    /// Rounded percentage of passed tests; `None` when nothing ran
    pub fn pass_rate(&self) -> Option<u64> {
        if self.num_total_tests == 0 {
            return None;
        }
        Some((self.num_passed_tests as f64 / self.num_total_tests as f64 * 100.0).round() as u64)
    }
}

/// One test file's outcome
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestFileResult {
    /// Absolute path of the test file
    pub name: String,
    pub status: TestStatus,
    pub message: String,
    #[serde(alias = "testResults")]
    pub assertion_results: Vec<AssertionResult>,
}

impl TestFileResult {
    pub fn file_name(&self) -> &str {
        Path::new(&self.name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssertionResult {
    pub full_name: String,
    pub title: String,
    pub status: TestStatus,
    /// Milliseconds
    pub duration: Option<f64>,
    pub failure_messages: Vec<String>,
}

/// Read and parse the results file written by Jest
pub fn load_results(path: &Path) -> Result<JestResults> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(RunnerError::MissingResults(path.to_path_buf()))
        }
        Err(source) => {
            return Err(RunnerError::IoError {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(RunnerError::EmptyResults(path.to_path_buf()));
    }

    serde_json::from_str(raw).map_err(|source| RunnerError::MalformedResults {
        path: path.to_path_buf(),
        source,
        raw: raw.to_string(),
    })
}
