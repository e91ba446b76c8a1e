// DTO module emission: one `<Name>.dto.js` per fixture name exporting Input/Output matchers.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use super::matcher::infer_matcher;
use super::{GeneratorError, Result};
use crate::parser::FlatRequest;
use crate::utils::write_to_file;

/// Example payloads taken from a request: its raw JSON body and first saved response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fixtures {
    pub input: Option<Value>,
    pub output: Option<Value>,
}

impl Fixtures {
    pub fn is_empty(&self) -> bool {
        self.input.is_none() && self.output.is_none()
    }
}

/// Pull the input/output fixtures out of a request.
/// Unparseable payloads are warned about and dropped.
pub fn extract_fixtures(request: &FlatRequest) -> Fixtures {
    let input = request
        .body
        .as_ref()
        .filter(|body| body.mode.as_deref() == Some("raw"))
        .and_then(|body| body.raw.as_deref())
        .and_then(|raw| parse_fixture(raw, &request.name, "input"));

    let output = request
        .responses
        .first()
        .and_then(|response| response.body.as_deref())
        .and_then(|body| parse_fixture(body, &request.name, "output"));

    Fixtures { input, output }
}

fn parse_fixture(text: &str, request_name: &str, side: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(err) => {
            warn!(request = %request_name, error = %err, "Failed to parse {} DTO", side);
            None
        }
    }
}

/// DTO module source, or `None` when there is nothing to export
pub fn render_dto(name: &str, fixtures: &Fixtures) -> Option<String> {
    if fixtures.is_empty() {
        return None;
    }

    let mut content = format!("// Auto-generated DTO for {}\n", name);
    if let Some(input) = &fixtures.input {
        content.push_str(&format!("exports.Input = {};\n", infer_matcher(input)));
    }
    if let Some(output) = &fixtures.output {
        content.push_str(&format!("exports.Output = {};\n", infer_matcher(output)));
    }

    Some(content)
}

pub fn dto_file_name(name: &str) -> String {
    format!("{}.dto.js", name)
}

/// Write `<dir>/<name>.dto.js`; returns the path written, if any
pub fn write_dto(dir: &Path, name: &str, fixtures: &Fixtures) -> Result<Option<PathBuf>> {
    let content = match render_dto(name, fixtures) {
        Some(content) => content,
        None => return Ok(None),
    };

    let path = dir.join(dto_file_name(name));
    write_to_file(&path, content).map_err(|source| GeneratorError::IoError {
        path: path.clone(),
        source,
    })?;

    Ok(Some(path))
}
