// Invokes Jest (through `npx` by default) against the generated test directory.

use std::fs;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus};

use tracing::{debug, info, warn};

use super::{Result, RunnerError};
use crate::config::RunnerConfig;

/// `<program> jest <test_dir> --json --outputFile=<results> --runInBand`
pub fn jest_command(config: &RunnerConfig) -> Command {
    let mut command = Command::new(&config.program);
    command
        .arg("jest")
        .arg(&config.test_dir)
        .arg("--json")
        .arg(format!("--outputFile={}", config.results_file.display()))
        .arg("--runInBand");
    command
}

/// Run Jest and wait for it. A failing suite is reported through the exit status, not as an error.
pub fn run_jest(config: &RunnerConfig) -> Result<ExitStatus> {
    // A results file left over from an earlier run must not be reported as this one
    match fs::remove_file(&config.results_file) {
        Ok(()) => debug!(path = %config.results_file.display(), "Removed stale results file"),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(RunnerError::IoError {
                path: config.results_file.clone(),
                source,
            })
        }
    }

    let mut command = jest_command(config);
    info!(command = ?command, "Running Jest");

    let output = command.output().map_err(|source| RunnerError::SpawnError {
        program: config.program.display().to_string(),
        source,
    })?;

    debug!(stdout = %String::from_utf8_lossy(&output.stdout), "Jest stdout");
    debug!(stderr = %String::from_utf8_lossy(&output.stderr), "Jest stderr");

    if output.status.success() {
        info!("Jest completed successfully");
    } else {
        warn!(status = %output.status, "Jest finished with failed tests");
    }

    Ok(output.status)
}
