pub mod cli;
pub mod config;
pub mod generator;
pub mod parser;
pub mod runner;
pub mod utils;

// Re-export frequently used items for easier access
pub use config::{GeneratorConfig, RunnerConfig};
pub use generator::GenerationSummary;
pub use parser::{load_collection, BearerToken, Collection, FlatRequest};
pub use runner::{run_suite, RunOutcome};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Parser error: {0}")]
    ParserError(#[from] parser::ParserError),

    #[error("Generator error: {0}")]
    GeneratorError(#[from] generator::GeneratorError),

    #[error("Runner error: {0}")]
    RunnerError(#[from] runner::RunnerError),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Load the collection, then emit DTO modules and Jest tests for every request in it
pub fn generate_from_collection(config: &GeneratorConfig) -> Result<GenerationSummary> {
    let mut collection = parser::load_collection(&config.collection)?;
    if let Some(info) = &collection.info {
        info!(collection = %info.name, "Loaded collection");
    }

    if config.clean {
        let removed = generator::clean_generated(&config.dto_dir, &config.test_dir)?;
        info!(count = removed, "Removed previously generated files");
    }

    let items = match collection.item.as_mut() {
        Some(items) => items,
        None => {
            warn!(path = %config.collection.display(), "No valid \"item\" array found");
            return Ok(GenerationSummary::default());
        }
    };

    let rewritten = parser::rewrite_bearer_tokens(items, &config.bearer_token);
    info!(count = rewritten, "Authorization headers updated");

    let variables = parser::variable_map(&collection.variable);
    let requests = parser::flatten_items(items, &variables);
    info!(count = requests.len(), "Flattened collection requests");

    let mut summary = generator::write_suite(&requests, &config.dto_dir, &config.test_dir)?;
    summary.auth_headers_rewritten = rewritten;

    Ok(summary)
}
