use clap::builder::NonEmptyStringValueParser;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{
    GeneratorConfig, RunnerConfig, BEARER_TOKEN_ENV, DEFAULT_COLLECTION_FILE, DEFAULT_DTO_DIR,
    DEFAULT_RESULTS_FILE, DEFAULT_RUNNER, DEFAULT_TEST_DIR,
};
use crate::parser::BearerToken;

#[derive(Debug, Parser)]
#[clap(
    name = "collection-test-generator",
    about = "Generate Jest API tests and DTO matchers from Postman collections",
    version
)]
pub struct Args {
    /// Log debug output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate DTO modules and Jest tests from a collection
    Generate {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        dirs: OutputDirs,
    },

    /// Run the generated tests and print a summary report
    Run {
        /// Directory containing the generated tests
        #[clap(long, value_name = "DIRECTORY", default_value = DEFAULT_TEST_DIR)]
        test_dir: PathBuf,

        #[clap(flatten)]
        runner: RunnerArgs,
    },

    /// Generate, then run
    All {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        dirs: OutputDirs,

        #[clap(flatten)]
        runner: RunnerArgs,
    },
}

#[derive(Debug, ClapArgs)]
pub struct SourceArgs {
    /// Path to the Postman collection file
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_COLLECTION_FILE)]
    pub collection: PathBuf,

    /// Token written into every `Authorization: Bearer` header
    #[clap(
        long,
        value_name = "TOKEN",
        env = BEARER_TOKEN_ENV,
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub bearer_token: String,

    /// Remove previously generated files first
    #[clap(long)]
    pub clean: bool,
}

#[derive(Debug, ClapArgs)]
pub struct OutputDirs {
    /// Output directory for generated DTO modules
    #[clap(long, value_name = "DIRECTORY", default_value = DEFAULT_DTO_DIR)]
    pub dto_dir: PathBuf,

    /// Output directory for generated tests
    #[clap(long, value_name = "DIRECTORY", default_value = DEFAULT_TEST_DIR)]
    pub test_dir: PathBuf,
}

#[derive(Debug, ClapArgs)]
pub struct RunnerArgs {
    /// File Jest writes its JSON results to
    #[clap(long, value_name = "FILE", default_value = DEFAULT_RESULTS_FILE)]
    pub results_file: PathBuf,

    /// Launcher used to invoke Jest
    #[clap(long, value_name = "PROGRAM", default_value = DEFAULT_RUNNER)]
    pub runner: PathBuf,
}

impl SourceArgs {
    pub fn generator_config(&self, dirs: &OutputDirs) -> GeneratorConfig {
        let token = BearerToken::new(self.bearer_token.clone());
        let mut config = GeneratorConfig::new(&self.collection, token)
            .with_output_dirs(&dirs.dto_dir, &dirs.test_dir);
        config.clean = self.clean;
        config
    }
}

impl RunnerArgs {
    pub fn runner_config(&self, test_dir: &Path) -> RunnerConfig {
        RunnerConfig {
            test_dir: test_dir.to_path_buf(),
            results_file: self.results_file.clone(),
            program: self.runner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_uses_defaults() {
        let args =
            Args::try_parse_from(["collection-test-generator", "generate", "--bearer-token", "t"])
                .unwrap();
        match args.command {
            Command::Generate { source, dirs } => {
                let config = source.generator_config(&dirs);
                assert_eq!(config.collection, PathBuf::from(DEFAULT_COLLECTION_FILE));
                assert_eq!(config.test_dir, PathBuf::from(DEFAULT_TEST_DIR));
                assert_eq!(config.bearer_token.expose(), "t");
                assert!(!config.clean);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn empty_token_is_rejected() {
        let result =
            Args::try_parse_from(["collection-test-generator", "generate", "--bearer-token", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn all_shares_the_test_dir() {
        let args = Args::try_parse_from([
            "collection-test-generator",
            "all",
            "--bearer-token",
            "t",
            "--test-dir",
            "out/tests",
            "--runner",
            "pnpm",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        match args.command {
            Command::All { dirs, runner, .. } => {
                let config = runner.runner_config(&dirs.test_dir);
                assert_eq!(config.test_dir, PathBuf::from("out/tests"));
                assert_eq!(config.program, PathBuf::from("pnpm"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
