// Derives fixture names (`GooglePlaces`, `PaymentMethodBreakdown`, ...) from request URLs.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::utils::to_pascal_case;

static UUID_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}").unwrap());

pub const FALLBACK_NAME: &str = "Endpoint";

/// Picks the last path segment that is neither numeric nor a UUID.
/// Falls back to the first host label, then to `Endpoint`.
pub fn meaningful_segment(raw_url: &str) -> String {
    let parsed = match Url::parse(raw_url.trim()) {
        Ok(parsed) => parsed,
        Err(_) => return FALLBACK_NAME.to_string(),
    };

    if let Some(segments) = parsed.path_segments() {
        let found = segments
            .filter(|segment| !segment.is_empty())
            .rev()
            .find(|segment| !is_numeric_segment(segment) && !UUID_PREFIX_RE.is_match(segment));
        if let Some(segment) = found {
            return segment.to_string();
        }
    }

    parsed
        .host_str()
        .and_then(|host| host.split('.').next())
        .filter(|label| !label.is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

/// Numeric IDs: decimal, exponent and `0x`/`0o`/`0b` forms of any length, plus `Infinity`
fn is_numeric_segment(segment: &str) -> bool {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return true;
    }

    let lower = trimmed.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    // `inf`, `nan` and friends parse as f64 but are names; only `Infinity` is a number
    let unsigned = trimmed.trim_start_matches(&['+', '-'][..]);
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return unsigned == "Infinity";
    }

    // Overflowing exponents (`1e400`) parse to infinity and still count
    trimmed.parse::<f64>().is_ok()
}

/// Replaces every non alphanumeric character with a space
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Fixture name for a request URL
pub fn derive_name(raw_url: &str) -> String {
    let name = to_pascal_case(&sanitize(&meaningful_segment(raw_url)));
    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

/// Hands out unique fixture names; repeats get a numeric suffix (`Users`, `Users2`, ...)
#[derive(Debug, Default)]
pub struct NameRegistry {
    claimed: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 1;
        while self.claimed.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}{}", base, suffix);
        }
        self.claimed.insert(candidate.clone());
        candidate
    }
}
