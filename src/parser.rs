// This file contains the parser module, responsible for reading the collection document
// and preparing its requests for generation.

pub mod auth;
pub mod collection;
pub mod flatten;
pub mod variables;

pub use auth::{rewrite_bearer_tokens, BearerToken};
pub use collection::{
    load_collection,
    parse_collection_str,
    Collection,
    CollectionItem,
    Header,
    ParserError,
    Request,
    RequestBody,
    RequestDef,
    RequestUrl,
    Result,
    SampleResponse,
    Variable,
};
pub use flatten::{flatten_items, FlatRequest};
pub use variables::{resolve_variables, variable_map, VariableMap};
