// Infers Jest shape matchers (types and keys, never literal values) from example JSON.

use std::fmt;

use serde_json::Value;

use crate::utils::js_string_literal;

/// Nesting below this depth collapses to `expect.any(Object)`
pub const MAX_DEPTH: usize = 10;

/// JavaScript constructor passed to `expect.any`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsType {
    String,
    Number,
    Boolean,
    Object,
}

impl JsType {
    fn constructor(self) -> &'static str {
        match self {
            JsType::String => "String",
            JsType::Number => "Number",
            JsType::Boolean => "Boolean",
            JsType::Object => "Object",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    /// `expect.anything()`
    Anything,

    /// `expect.any(<type>)`
    Any(JsType),

    /// `expect.arrayContaining([...])`, holding at most the first element's matcher
    ArrayContaining(Vec<Matcher>),

    /// `expect.objectContaining({...})`, keys in document order
    ObjectContaining(Vec<(String, Matcher)>),
}

/// Build a matcher for an example value
pub fn infer_matcher(value: &Value) -> Matcher {
    infer_at_depth(value, 0)
}

fn infer_at_depth(value: &Value, depth: usize) -> Matcher {
    if depth > MAX_DEPTH {
        return Matcher::Any(JsType::Object);
    }

    match value {
        Value::Null => Matcher::Anything,
        Value::Array(items) => Matcher::ArrayContaining(
            items
                .first()
                .map(|sample| infer_at_depth(sample, depth + 1))
                .into_iter()
                .collect(),
        ),
        // Null members are left out of the shape
        Value::Object(fields) => Matcher::ObjectContaining(
            fields
                .iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), infer_at_depth(v, depth + 1)))
                .collect(),
        ),
        Value::String(_) => Matcher::Any(JsType::String),
        Value::Number(_) => Matcher::Any(JsType::Number),
        Value::Bool(_) => Matcher::Any(JsType::Boolean),
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Anything => f.write_str("expect.anything()"),
            Matcher::Any(js_type) => write!(f, "expect.any({})", js_type.constructor()),
            Matcher::ArrayContaining(items) => {
                f.write_str("expect.arrayContaining([")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("])")
            }
            Matcher::ObjectContaining(fields) if fields.is_empty() => {
                f.write_str("expect.objectContaining({})")
            }
            Matcher::ObjectContaining(fields) => {
                f.write_str("expect.objectContaining({ ")?;
                for (i, (key, matcher)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", js_string_literal(key), matcher)?;
                }
                f.write_str(" })")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_map_to_any() {
        assert_eq!(infer_matcher(&json!("2024-01-01T00:00:00Z")).to_string(), "expect.any(String)");
        assert_eq!(infer_matcher(&json!("me@example.com")).to_string(), "expect.any(String)");
        assert_eq!(infer_matcher(&json!(3.5)).to_string(), "expect.any(Number)");
        assert_eq!(infer_matcher(&json!(false)).to_string(), "expect.any(Boolean)");
        assert_eq!(infer_matcher(&json!(null)).to_string(), "expect.anything()");
    }

    #[test]
    fn objects_keep_key_order_and_drop_nulls() {
        let matcher = infer_matcher(&json!({
            "id": 7,
            "deletedAt": null,
            "tags": ["a", "b"],
            "owner": { "name": "Ada" }
        }));

        assert_eq!(
            matcher.to_string(),
            r#"expect.objectContaining({ "id": expect.any(Number), "tags": expect.arrayContaining([expect.any(String)]), "owner": expect.objectContaining({ "name": expect.any(String) }) })"#
        );
    }

    #[test]
    fn arrays_sample_only_the_first_element() {
        let matcher = infer_matcher(&json!([{ "a": 1 }, "ignored", 3]));
        assert_eq!(
            matcher,
            Matcher::ArrayContaining(vec![Matcher::ObjectContaining(vec![(
                "a".to_string(),
                Matcher::Any(JsType::Number)
            )])])
        );
        assert_eq!(infer_matcher(&json!([])).to_string(), "expect.arrayContaining([])");
    }

    #[test]
    fn deep_nesting_collapses_to_object() {
        let mut value = json!(1);
        for _ in 0..=MAX_DEPTH {
            value = json!([value]);
        }

        let rendered = infer_matcher(&value).to_string();
        let expected = format!(
            "{}expect.any(Object){}",
            "expect.arrayContaining([".repeat(MAX_DEPTH + 1),
            "])".repeat(MAX_DEPTH + 1)
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn keys_are_escaped() {
        let matcher = infer_matcher(&json!({ "say \"hi\"": true }));
        assert_eq!(
            matcher.to_string(),
            r#"expect.objectContaining({ "say \"hi\"": expect.any(Boolean) })"#
        );
    }
}
