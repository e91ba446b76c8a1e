// Collection variable substitution for `{{key}}` placeholders.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;

use super::collection::Variable;

static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{\s*([^{}\s]+)\s*\}\}").unwrap());

pub type VariableMap = HashMap<String, String>;

/// Build a lookup table from the collection's enabled variables
pub fn variable_map(variables: &[Variable]) -> VariableMap {
    variables
        .iter()
        .filter(|v| !v.disabled && !v.key.is_empty())
        .map(|v| {
            let value = match &v.value {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            };
            (v.key.clone(), value)
        })
        .collect()
}

/// Substitute known variables; unknown placeholders are left as written
pub fn resolve_variables(text: &str, variables: &VariableMap) -> String {
    if variables.is_empty() {
        return text.to_string();
    }

    VARIABLE_RE
        .replace_all(text, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars() -> VariableMap {
        variable_map(&[
            Variable {
                key: "baseUrl".into(),
                value: Some(json!("https://api.test")),
                disabled: false,
            },
            Variable {
                key: "version".into(),
                value: Some(json!(2)),
                disabled: false,
            },
            Variable {
                key: "off".into(),
                value: Some(json!("nope")),
                disabled: true,
            },
        ])
    }

    #[test]
    fn substitutes_known_variables() {
        assert_eq!(
            resolve_variables("{{baseUrl}}/v{{ version }}/users", &vars()),
            "https://api.test/v2/users"
        );
    }

    #[test]
    fn keeps_unknown_and_disabled_placeholders() {
        assert_eq!(
            resolve_variables("{{baseUrl}}/{{off}}/{{missing}}", &vars()),
            "https://api.test/{{off}}/{{missing}}"
        );
    }
}
