//! Parameter value conversion.
//!
//! Every bound argument is turned into text by a [`ParamConverter`]
//! before it reaches a request. Values arrive as [`serde_json::Value`]
//! so one converter can handle any serializable argument.

use serde_json::Value;

use crate::{Error, Result};

/// Turns a bound value into its textual form.
///
/// Closures taking a `&Value` and returning `Result<String>` are
/// converters too.
///
/// # Example
///
/// ```
/// use tongs_core::{ParamConverter, Result};
/// use serde_json::{Value, json};
///
/// let upper = |value: &Value| -> Result<String> {
///     Ok(value.as_str().unwrap_or_default().to_uppercase())
/// };
/// assert_eq!(upper.convert(&json!("abc")).ok(), Some("ABC".to_string()));
/// ```
pub trait ParamConverter: Send + Sync {
    /// Convert a value into text.
    fn convert(&self, value: &Value) -> Result<String>;

    /// Converter name, used in logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> ParamConverter for F
where
    F: Fn(&Value) -> Result<String> + Send + Sync,
{
    fn convert(&self, value: &Value) -> Result<String> {
        self(value)
    }
}

/// The default converter: plain textual form.
///
/// Strings are written without quotes, numbers and booleans with their
/// usual representation. Arrays and objects fall back to compact JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayConverter;

impl ParamConverter for DisplayConverter {
    fn convert(&self, value: &Value) -> Result<String> {
        let text = match value {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            Value::Bool(_) | Value::Number(_) => value.to_string(),
            Value::Array(_) | Value::Object(_) => serde_json::to_string(value)?,
        };
        Ok(text)
    }
}

/// Serializes the value as compact JSON, omitting `null` object members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonConverter;

impl ParamConverter for JsonConverter {
    fn convert(&self, value: &Value) -> Result<String> {
        let stripped = strip_nulls(value.clone());
        serde_json::to_string(&stripped).map_err(Error::from)
    }
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .filter(|(_, member)| !member.is_null())
                .map(|(key, member)| (key, strip_nulls(member)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn display_converter_writes_plain_text() {
        let converter = DisplayConverter;
        assert_eq!(converter.convert(&json!("hello")).expect("string"), "hello");
        assert_eq!(converter.convert(&json!(42)).expect("number"), "42");
        assert_eq!(converter.convert(&json!(1.5)).expect("float"), "1.5");
        assert_eq!(converter.convert(&json!(true)).expect("bool"), "true");
        assert_eq!(converter.convert(&json!([1, 2])).expect("array"), "[1,2]");
    }

    #[test]
    fn json_converter_omits_null_members() {
        let value = json!({
            "name": "alice",
            "nickname": null,
            "address": { "city": "Lyon", "zip": null }
        });
        let text = JsonConverter.convert(&value).expect("should serialize");
        let parsed: Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(parsed, json!({ "name": "alice", "address": { "city": "Lyon" } }));
    }

    #[test]
    fn json_converter_quotes_strings() {
        assert_eq!(JsonConverter.convert(&json!("a")).expect("string"), r#""a""#);
    }

    #[test]
    fn closures_are_converters() {
        let prefixed = |value: &Value| -> Result<String> {
            Ok(format!("id-{}", DisplayConverter.convert(value)?))
        };
        assert_eq!(prefixed.convert(&json!(7)).expect("converted"), "id-7");
    }
}
