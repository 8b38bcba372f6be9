//! JSONPath reads over response content.

use serde_json::Value;
use serde_json_path::JsonPath;

use crate::{Error, Result};

/// Compile a JSONPath expression.
pub(crate) fn compile(expression: &str) -> Result<JsonPath> {
    JsonPath::parse(expression).map_err(|e| Error::json_path(expression, e))
}

/// Parse `content` as JSON.
pub(crate) fn parse_document(content: &str) -> Result<Value> {
    Ok(serde_json::from_str(content)?)
}

/// Evaluate `expression` against a JSON document.
///
/// An indefinite expression always reads as an array of the matched nodes,
/// possibly empty. A definite one reads as its single node, or `None`.
pub(crate) fn read_value(document: &Value, expression: &str) -> Result<Option<Value>> {
    let path = compile(expression)?;
    let nodes = path.query(document).all();
    let value = if is_definite(expression) {
        nodes.into_iter().next().cloned()
    } else {
        Some(Value::Array(nodes.into_iter().cloned().collect()))
    };
    Ok(value)
}

/// A definite expression designates at most one node: no wildcard, deep
/// scan, filter, slice or union outside of quoted member names.
pub(crate) fn is_definite(expression: &str) -> bool {
    let mut quote = None;
    let mut escaped = false;
    let mut previous = None;
    for current in expression.chars() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if current == '\\' {
                escaped = true;
            } else if current == open {
                quote = None;
            }
            previous = Some(current);
            continue;
        }
        match current {
            '\'' | '"' => quote = Some(current),
            '*' | '?' | ':' | ',' => return false,
            '.' if previous == Some('.') => return false,
            _ => {}
        }
        previous = Some(current);
    }
    true
}

/// Evaluate `expression` against JSON text.
pub(crate) fn read(content: &str, expression: &str) -> Result<Option<Value>> {
    read_value(&parse_document(content)?, expression)
}

/// Like [`read`], a missing node is an error.
pub(crate) fn read_required(content: &str, expression: &str) -> Result<Value> {
    read(content, expression)?
        .ok_or_else(|| Error::json_path(expression, "no value at path"))
}

/// Textual form of a node: strings as-is, everything else as compact JSON.
pub(crate) fn to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
