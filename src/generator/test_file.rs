// Jest + supertest file emission: one `<Name>.test.js` per request.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use url::{form_urlencoded, Url};

use super::dto::Fixtures;
use super::{GeneratorError, Result};
use crate::parser::{FlatRequest, Header};
use crate::utils::{js_single_quoted, write_to_file};

/// Headers copied into generated tests (matched case-insensitively)
pub const ALLOWED_HEADERS: [&str; 7] = [
    "authorization",
    "content-type",
    "referer",
    "user-agent",
    "sec-ch-ua",
    "sec-ch-ua-mobile",
    "sec-ch-ua-platform",
];

/// Methods that send the input fixture as the request body
const BODY_METHODS: [&str; 3] = ["POST", "PUT", "PATCH"];

/// Where a generated test sends its request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestTarget {
    /// `scheme://host[:port]`
    pub base_url: String,

    /// Path plus the cleaned query string
    pub path_and_query: String,
}

/// Split a request URL into the supertest base and path. Query pairs with an empty
/// key or value are dropped and values are trimmed.
pub fn split_target(raw_url: &str) -> Result<TestTarget> {
    let parsed = Url::parse(raw_url.trim()).map_err(|source| GeneratorError::InvalidUrl {
        url: raw_url.to_string(),
        source,
    })?;

    let mut base_url = format!("{}://{}", parsed.scheme(), parsed.host_str().unwrap_or_default());
    if let Some(port) = parsed.port() {
        base_url.push_str(&format!(":{}", port));
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in parsed.query_pairs() {
        if !key.is_empty() && !value.is_empty() {
            query.append_pair(&key, value.trim());
        }
    }
    let query = query.finish();

    let path_and_query = if query.is_empty() {
        parsed.path().to_string()
    } else {
        format!("{}?{}", parsed.path(), query)
    };

    Ok(TestTarget {
        base_url,
        path_and_query,
    })
}

/// Allow-listed, enabled, non-empty headers with trimmed values, in collection order
pub fn test_headers(headers: &[Header]) -> Map<String, Value> {
    let mut safe = Map::new();

    for header in headers.iter().filter(|h| !h.disabled && !h.key.is_empty()) {
        let value = match header.value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };

        if ALLOWED_HEADERS.iter().any(|allowed| header.key.eq_ignore_ascii_case(allowed)) {
            safe.insert(header.key.clone(), Value::String(value.trim().to_string()));
        }
    }

    safe
}

fn dto_import(name: &str, fixtures: &Fixtures, dto_module: &str) -> Option<String> {
    let bindings = match (&fixtures.input, &fixtures.output) {
        (Some(_), Some(_)) => format!("Input: {name}Input, Output: {name}Output", name = name),
        (None, Some(_)) => format!("Output: {}Output", name),
        (Some(_), None) => format!("Input: {}Input", name),
        (None, None) => return None,
    };

    Some(format!(
        "const {{ {} }} = require({});",
        bindings,
        js_single_quoted(dto_module)
    ))
}

/// Render the test file for one request
pub fn render_test(
    request: &FlatRequest,
    target: &TestTarget,
    name: &str,
    fixtures: &Fixtures,
    dto_module: &str,
) -> String {
    let mut chain = vec![
        format!("const res = await request({})", js_single_quoted(&target.base_url)),
        format!(
            ".{}({})",
            request.method.to_lowercase(),
            js_single_quoted(&target.path_and_query)
        ),
    ];

    let headers = test_headers(&request.headers);
    if !headers.is_empty() {
        chain.push(format!(".set({})", Value::Object(headers)));
    }

    if fixtures.input.is_some() && BODY_METHODS.contains(&request.method.as_str()) {
        chain.push(format!(".send({}Input)", name));
    }

    let mut assertions = vec!["expect(res.status).toBe(200);".to_string()];
    if fixtures.output.is_some() {
        assertions.push(format!("expect(res.body).toMatchObject({}Output);", name));
    }

    let mut source = format!("// Auto-generated test for {}\n", comment_text(&request.name));
    if let Some(import) = dto_import(name, fixtures, dto_module) {
        source.push_str(&import);
        source.push_str("\n\n");
    }
    source.push_str("const request = require('supertest');\n\n");
    source.push_str(&format!(
        "describe({}, () => {{\n",
        js_single_quoted(&format!("{} {}", request.method, request.url))
    ));
    source.push_str(
        "  it('should return status 200 and match expected structure', async () => {\n",
    );
    source.push_str(&format!("    {};\n\n", chain.join("\n      ")));
    for assertion in &assertions {
        source.push_str(&format!("    {}\n", assertion));
    }
    source.push_str("  });\n});\n");

    source
}

/// Flattens JS line terminators so the text stays inside a `//` comment
fn comment_text(text: &str) -> String {
    text.replace(&['\r', '\n', '\u{2028}', '\u{2029}'][..], " ")
}

pub fn test_file_name(name: &str) -> String {
    format!("{}.test.js", name)
}

/// Write `<dir>/<name>.test.js`
pub fn write_test(dir: &Path, name: &str, source: &str) -> Result<PathBuf> {
    let path = dir.join(test_file_name(name));
    write_to_file(&path, source).map_err(|source| GeneratorError::IoError {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
