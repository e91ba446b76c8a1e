// Flattens the folder tree into the ordered list of requests to generate for.

use tracing::warn;

use super::collection::{CollectionItem, Header, RequestBody, SampleResponse};
use super::variables::{resolve_variables, VariableMap};

/// A leaf request with its folder path folded into the name
#[derive(Debug, Clone)]
pub struct FlatRequest {
    /// Folder names and the request name, joined with spaces
    pub name: String,

    /// Upper-cased HTTP method
    pub method: String,

    /// Raw URL with collection variables substituted
    pub url: String,

    pub headers: Vec<Header>,

    pub body: Option<RequestBody>,

    pub responses: Vec<SampleResponse>,
}

/// Depth-first flattening in document order
pub fn flatten_items(items: &[CollectionItem], variables: &VariableMap) -> Vec<FlatRequest> {
    let mut flat = Vec::new();
    collect_requests(items, "", variables, &mut flat);
    flat
}

fn collect_requests(
    items: &[CollectionItem],
    parent_name: &str,
    variables: &VariableMap,
    flat: &mut Vec<FlatRequest>,
) {
    for item in items {
        let name = if parent_name.is_empty() {
            item.name.clone()
        } else {
            format!("{} {}", parent_name, item.name)
        };

        if let Some(children) = &item.item {
            collect_requests(children, &name, variables, flat);
            continue;
        }

        let Some(definition) = &item.request else {
            warn!(item = %name, "Skipping item without a request");
            continue;
        };

        let request = definition.to_request();
        let headers = request
            .header
            .into_iter()
            .map(|header| Header {
                value: header.value.map(|v| resolve_variables(&v, variables)),
                ..header
            })
            .collect();

        flat.push(FlatRequest {
            name,
            method: request.method.trim().to_uppercase(),
            url: resolve_variables(request.url.raw(), variables),
            headers,
            body: request.body,
            responses: item.response.clone(),
        });
    }
}
