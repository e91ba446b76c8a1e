pub mod dto;
pub mod matcher;
pub mod naming;
pub mod suite;
pub mod test_file;

use std::path::PathBuf;

use thiserror::Error;

pub use dto::{extract_fixtures, render_dto, write_dto, Fixtures};
pub use matcher::{infer_matcher, JsType, Matcher};
pub use naming::{derive_name, NameRegistry};
pub use suite::{clean_generated, write_suite, GenerationSummary};
pub use test_file::{render_test, split_target, TestTarget};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Failed to write {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
