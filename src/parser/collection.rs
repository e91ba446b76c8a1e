// src/parser/collection.rs

use serde::{Deserialize, Deserializer};
use serde_json::{Error as JsonError, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    InvalidCollection {
        path: PathBuf,
        #[source]
        source: JsonError,
    },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] JsonError),
}

pub type Result<T> = std::result::Result<T, ParserError>;

/// Represents a parsed Postman collection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Collection {
    /// Collection metadata (name, schema)
    #[serde(default)]
    pub info: Option<CollectionInfo>,

    /// Top-level folders and requests; `None` when the document has no item array
    #[serde(default)]
    pub item: Option<Vec<CollectionItem>>,

    /// Collection-level variables referenced as `{{key}}`
    #[serde(default)]
    pub variable: Vec<Variable>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub schema: Option<String>,
}

/// A node of the collection tree: a folder when `item` is set, a request when `request` is set
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Child items of a folder
    #[serde(default)]
    pub item: Option<Vec<CollectionItem>>,

    #[serde(default)]
    pub request: Option<RequestDef>,

    /// Saved example responses, in the order they were recorded
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: Vec<SampleResponse>,
}

/// A request as stored in the collection. Postman allows a bare URL string
/// as shorthand for a `GET` with no headers or body.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestDef {
    Url(String),
    Full(Request),
}

impl RequestDef {
    /// Normalizes the shorthand form into a full request
    pub fn to_request(&self) -> Request {
        match self {
            RequestDef::Url(url) => Request {
                url: RequestUrl::Raw(url.clone()),
                ..Request::default()
            },
            RequestDef::Full(request) => request.clone(),
        }
    }

    pub fn headers_mut(&mut self) -> Option<&mut Vec<Header>> {
        match self {
            RequestDef::Url(_) => None,
            RequestDef::Full(request) => Some(&mut request.header),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// HTTP method as written in the collection
    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub header: Vec<Header>,

    #[serde(default)]
    pub body: Option<RequestBody>,

    #[serde(default)]
    pub url: RequestUrl,
}

impl Default for Request {
    fn default() -> Self {
        Request {
            method: default_method(),
            header: Vec::new(),
            body: None,
            url: RequestUrl::default(),
        }
    }
}

/// Request URL, either the raw string or Postman's structured form
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestUrl {
    Raw(String),
    Detailed {
        #[serde(default, deserialize_with = "null_as_default")]
        raw: String,
    },
}

impl RequestUrl {
    pub fn raw(&self) -> &str {
        match self {
            RequestUrl::Raw(raw) | RequestUrl::Detailed { raw } => raw,
        }
    }
}

impl Default for RequestUrl {
    fn default() -> Self {
        RequestUrl::Raw(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Header {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,

    #[serde(default)]
    pub value: Option<String>,

    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    /// Body mode (`raw`, `formdata`, `urlencoded`, ...)
    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub raw: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SampleResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub code: Option<u16>,

    /// Response body exactly as it was saved
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Variable {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,

    #[serde(default)]
    pub value: Option<Value>,

    #[serde(default)]
    pub disabled: bool,
}

fn default_method() -> String {
    "GET".to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Load a Postman collection from a file
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<Collection> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ParserError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ParserError::InvalidCollection {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a Postman collection from a string
pub fn parse_collection_str(content: &str) -> Result<Collection> {
    Ok(serde_json::from_str(content)?)
}
