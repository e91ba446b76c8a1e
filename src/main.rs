// This is the entry point for the CLI application.
// It parses command-line arguments and delegates to the library for generation and test runs.

use std::process;

use clap::Parser;
use collection_test_generator::cli::{Args, Command};
use collection_test_generator::runner::RunnerError;
use collection_test_generator::{
    generate_from_collection, run_suite, AppError, GenerationSummary, RunOutcome,
};
use tracing_subscriber::EnvFilter;

fn main() {
    // Pick up BEARER_TOKEN and friends from .env before clap reads the environment
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args.command) {
        Ok(code) => process::exit(code),
        Err(err) => {
            report_error(&err);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> collection_test_generator::Result<i32> {
    match command {
        Command::Generate { source, dirs } => {
            let summary = generate_from_collection(&source.generator_config(&dirs))?;
            print_summary(&summary);
            Ok(0)
        }
        Command::Run { test_dir, runner } => {
            let outcome = run_suite(&runner.runner_config(&test_dir), &mut anstream::stdout())?;
            Ok(exit_code(outcome))
        }
        Command::All { source, dirs, runner } => {
            let summary = generate_from_collection(&source.generator_config(&dirs))?;
            print_summary(&summary);
            let config = runner.runner_config(&dirs.test_dir);
            let outcome = run_suite(&config, &mut anstream::stdout())?;
            Ok(exit_code(outcome))
        }
    }
}

fn print_summary(summary: &GenerationSummary) {
    println!(
        "Generated {} DTO file(s) and {} test file(s)",
        summary.dto_files.len(),
        summary.test_files.len()
    );
    if summary.skipped > 0 {
        println!("Skipped {} request(s) with invalid URLs", summary.skipped);
    }
}

fn exit_code(outcome: RunOutcome) -> i32 {
    if outcome.is_success() {
        0
    } else {
        1
    }
}

fn report_error(err: &AppError) {
    eprintln!("Error: {}", err);

    match err {
        AppError::RunnerError(RunnerError::MissingResults(_)) => {
            eprintln!("Possible causes:");
            eprintln!("   • Jest is not installed (run: npm install jest supertest --save-dev)");
            eprintln!("   • Syntax error in a test or DTO file");
            eprintln!("   • Permission issue");
        }
        AppError::RunnerError(RunnerError::MalformedResults { raw, .. }) => {
            eprintln!("Raw content:\n---\n{}\n---", raw);
        }
        _ => {}
    }
}
