//! JSONPath matchers.

use serde_json::Value;

use super::ResultMatcher;
use crate::jsonpath;
use crate::{Error, HttpResult, Result};

/// Factory for matchers evaluating `expression` against a JSON body.
#[must_use]
pub fn json_path(expression: impl Into<String>) -> JsonPathMatchers {
    JsonPathMatchers {
        expression: expression.into(),
    }
}

/// Matchers on the value found at a JSONPath expression.
#[derive(Debug, Clone)]
pub struct JsonPathMatchers {
    expression: String,
}

impl JsonPathMatchers {
    /// The JSONPath expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    fn label(&self) -> String {
        format!("JSON path '{}'", self.expression)
    }

    fn read(&self, result: &HttpResult) -> Result<Option<Value>> {
        jsonpath::read(result.response_string_content(), &self.expression)
    }

    /// The value found equals `expected`.
    #[must_use]
    pub fn value(self, expected: impl Into<Value>) -> impl ResultMatcher {
        let expected = expected.into();
        move |result: &HttpResult| match self.read(result)? {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(Error::assertion(self.label(), &expected, actual)),
            None => Err(Error::assertion(self.label(), &expected, "no value")),
        }
    }

    /// The value found satisfies `predicate`, described by `description`.
    #[must_use]
    pub fn matches<P>(self, description: impl Into<String>, predicate: P) -> impl ResultMatcher
    where
        P: Fn(&Value) -> bool + Send + Sync,
    {
        let description = description.into();
        move |result: &HttpResult| {
            let actual = self.read(result)?.unwrap_or(Value::Null);
            if predicate(&actual) {
                Ok(())
            } else {
                Err(Error::assertion(self.label(), &description, actual))
            }
        }
    }

    /// A non-null value is found; an array must also be non-empty.
    #[must_use]
    pub fn exists(self) -> impl ResultMatcher {
        move |result: &HttpResult| match self.read(result)? {
            Some(actual) if is_present(&actual) => Ok(()),
            Some(actual) => Err(Error::assertion(self.label(), "an existing value", actual)),
            None => Err(Error::assertion(self.label(), "an existing value", "no value")),
        }
    }

    /// No value is found, or it is null or an empty array.
    #[must_use]
    pub fn does_not_exist(self) -> impl ResultMatcher {
        move |result: &HttpResult| match self.read(result)? {
            Some(actual) if is_present(&actual) => {
                Err(Error::assertion(self.label(), "no value", actual))
            }
            _ => Ok(()),
        }
    }

    /// The value found is an array.
    #[must_use]
    pub fn is_array(self) -> impl ResultMatcher {
        move |result: &HttpResult| match self.read(result)? {
            Some(Value::Array(_)) => Ok(()),
            Some(actual) => Err(Error::assertion(self.label(), "an array", actual)),
            None => Err(Error::assertion(self.label(), "an array", "no value")),
        }
    }

    /// The value found is an array of `size` elements.
    #[must_use]
    pub fn array_size(self, size: usize) -> impl ResultMatcher {
        move |result: &HttpResult| match self.read(result)? {
            Some(Value::Array(items)) if items.len() == size => Ok(()),
            Some(Value::Array(items)) => Err(Error::assertion(
                self.label(),
                format!("an array of size {size}"),
                format!("an array of size {}", items.len()),
            )),
            Some(actual) => Err(Error::assertion(
                self.label(),
                format!("an array of size {size}"),
                actual,
            )),
            None => Err(Error::assertion(
                self.label(),
                format!("an array of size {size}"),
                "no value",
            )),
        }
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}
