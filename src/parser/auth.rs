// Replaces recorded bearer credentials with the token configured for this run.

use std::fmt;

use super::collection::{CollectionItem, Header, RequestDef};

const BEARER_PREFIX: &str = "Bearer ";

/// Bearer token injected into `Authorization` headers.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        BearerToken(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Full header value, e.g. `Bearer abc123`
    pub fn header_value(&self) -> String {
        format!("{}{}", BEARER_PREFIX, self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(****)")
    }
}

/// Walk the item tree and rewrite every `Authorization: Bearer ...` header.
/// Returns the number of headers that were rewritten.
pub fn rewrite_bearer_tokens(items: &mut [CollectionItem], token: &BearerToken) -> usize {
    let mut rewritten = 0;

    for item in items.iter_mut() {
        if let Some(children) = item.item.as_mut() {
            rewritten += rewrite_bearer_tokens(children, token);
        }

        if let Some(headers) = item.request.as_mut().and_then(RequestDef::headers_mut) {
            for header in headers.iter_mut().filter(|h| is_bearer_authorization(h)) {
                header.value = Some(token.header_value());
                rewritten += 1;
            }
        }
    }

    rewritten
}

fn is_bearer_authorization(header: &Header) -> bool {
    header.key.eq_ignore_ascii_case("authorization")
        && header
            .value
            .as_deref()
            .map_or(false, |value| value.starts_with(BEARER_PREFIX))
}
