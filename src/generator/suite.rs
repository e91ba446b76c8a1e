use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::dto::{self, extract_fixtures};
use super::naming::{derive_name, NameRegistry};
use super::test_file::{self, split_target};
use super::{GeneratorError, Result};
use crate::parser::FlatRequest;
use crate::utils::{ensure_directory_exists, module_specifier};

/// What a generation pass wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub dto_files: Vec<PathBuf>,
    pub test_files: Vec<PathBuf>,
    /// Requests dropped because their URL could not be parsed
    pub skipped: usize,
    /// Authorization headers rewritten with the configured token
    pub auth_headers_rewritten: usize,
}

/// Generates the DTO module and test file for every request.
///
/// Requests deriving the same name get suffixed names (`Bookings`, `Bookings2`) so each one
/// keeps its own files instead of overwriting an earlier request's output.
pub fn write_suite(
    requests: &[FlatRequest],
    dto_dir: &Path,
    test_dir: &Path,
) -> Result<GenerationSummary> {
    for dir in [dto_dir, test_dir] {
        ensure_directory_exists(dir).map_err(|source| GeneratorError::IoError {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut registry = NameRegistry::new();
    let mut summary = GenerationSummary::default();

    for request in requests {
        let target = match split_target(&request.url) {
            Ok(target) => target,
            Err(err) => {
                warn!(request = %request.name, error = %err, "Invalid URL skipped");
                summary.skipped += 1;
                continue;
            }
        };

        let name = registry.claim(&derive_name(&request.url));
        debug!(request = %request.name, %name, "Derived fixture name");
        let fixtures = extract_fixtures(request);

        if let Some(path) = dto::write_dto(dto_dir, &name, &fixtures)? {
            info!("Generated DTO: {}", dto::dto_file_name(&name));
            summary.dto_files.push(path);
        }

        let module = module_specifier(test_dir, dto_dir, &format!("{}.dto", name));
        let source = test_file::render_test(request, &target, &name, &fixtures, &module);
        let path = test_file::write_test(test_dir, &name, &source)?;
        info!("Generated Test: {}", test_file::test_file_name(&name));
        summary.test_files.push(path);
    }

    Ok(summary)
}

/// Removes previously generated `*.dto.js` / `*.test.js` files
pub fn clean_generated(dto_dir: &Path, test_dir: &Path) -> Result<usize> {
    let mut removed = 0;

    for (dir, suffix) in [(dto_dir, ".dto.js"), (test_dir, ".test.js")] {
        if !dir.is_dir() {
            continue;
        }

        let entries = fs::read_dir(dir).map_err(|source| GeneratorError::IoError {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            let generated = path
                .file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| n.ends_with(suffix));
            if generated && path.is_file() {
                fs::remove_file(&path).map_err(|source| GeneratorError::IoError {
                    path: path.clone(),
                    source,
                })?;
                removed += 1;
            }
        }
    }

    Ok(removed)
}
