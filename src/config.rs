// Resolved settings handed from the CLI to the library.

use std::path::PathBuf;

use crate::parser::BearerToken;

pub const DEFAULT_COLLECTION_FILE: &str = "postman_collection.json";
pub const DEFAULT_DTO_DIR: &str = "dtos";
pub const DEFAULT_TEST_DIR: &str = "tests/generated";
pub const DEFAULT_RESULTS_FILE: &str = "jest-results.json";
pub const DEFAULT_RUNNER: &str = "npx";

/// Environment variable holding the token injected into bearer headers
pub const BEARER_TOKEN_ENV: &str = "BEARER_TOKEN";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Postman collection to read
    pub collection: PathBuf,

    /// Directory receiving `<Name>.dto.js` modules
    pub dto_dir: PathBuf,

    /// Directory receiving `<Name>.test.js` files
    pub test_dir: PathBuf,

    pub bearer_token: BearerToken,

    /// Remove previously generated files before writing
    pub clean: bool,
}

impl GeneratorConfig {
    pub fn new(collection: impl Into<PathBuf>, bearer_token: BearerToken) -> Self {
        GeneratorConfig {
            collection: collection.into(),
            dto_dir: PathBuf::from(DEFAULT_DTO_DIR),
            test_dir: PathBuf::from(DEFAULT_TEST_DIR),
            bearer_token,
            clean: false,
        }
    }

    pub fn with_output_dirs(
        mut self,
        dto_dir: impl Into<PathBuf>,
        test_dir: impl Into<PathBuf>,
    ) -> Self {
        self.dto_dir = dto_dir.into();
        self.test_dir = test_dir.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory holding the generated tests
    pub test_dir: PathBuf,

    /// Where Jest writes its `--json` report
    pub results_file: PathBuf,

    /// Launcher invoked as `<program> jest ...`
    pub program: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            test_dir: PathBuf::from(DEFAULT_TEST_DIR),
            results_file: PathBuf::from(DEFAULT_RESULTS_FILE),
            program: PathBuf::from(DEFAULT_RUNNER),
        }
    }
}
