//! XPath matchers.

use sxd_xpath::Value;

use super::ResultMatcher;
use crate::{Error, HttpResult, Result};

/// Factory for matchers evaluating `expression` against an XML body.
#[must_use]
pub fn xpath(expression: impl Into<String>) -> XPathMatchers {
    XPathMatchers {
        expression: expression.into(),
    }
}

/// Matchers on the result of an XPath expression.
#[derive(Debug, Clone)]
pub struct XPathMatchers {
    expression: String,
}

/// What an XPath evaluation yielded, detached from the document.
#[derive(Debug, Clone, PartialEq)]
struct Evaluation {
    text: String,
    present: bool,
}

impl XPathMatchers {
    /// The XPath expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    fn label(&self) -> String {
        format!("XPath '{}'", self.expression)
    }

    fn evaluate(&self, result: &HttpResult) -> Result<Evaluation> {
        let package = sxd_document::parser::parse(result.response_string_content())
            .map_err(|e| Error::xml(format!("cannot parse response: {e:?}")))?;
        let document = package.as_document();
        let value = sxd_xpath::evaluate_xpath(&document, &self.expression)
            .map_err(|e| Error::xml(format!("cannot evaluate '{}': {e:?}", self.expression)))?;

        let present = match &value {
            Value::Nodeset(nodes) => nodes.size() > 0,
            Value::Boolean(flag) => *flag,
            Value::Number(_) | Value::String(_) => true,
        };
        Ok(Evaluation {
            text: value.string(),
            present,
        })
    }

    /// The string value of the evaluation equals `expected`.
    ///
    /// A node set evaluates to the text of its first node in document order.
    #[must_use]
    pub fn value(self, expected: impl Into<String>) -> impl ResultMatcher {
        let expected = expected.into();
        move |result: &HttpResult| {
            let actual = self.evaluate(result)?.text;
            if actual == expected {
                Ok(())
            } else {
                Err(Error::assertion(self.label(), &expected, actual))
            }
        }
    }

    /// The expression selects at least one node.
    #[must_use]
    pub fn exists(self) -> impl ResultMatcher {
        move |result: &HttpResult| {
            if self.evaluate(result)?.present {
                Ok(())
            } else {
                Err(Error::assertion(self.label(), "an existing node", "no node"))
            }
        }
    }

    /// The expression selects no node.
    #[must_use]
    pub fn does_not_exist(self) -> impl ResultMatcher {
        move |result: &HttpResult| {
            let evaluation = self.evaluate(result)?;
            if evaluation.present {
                Err(Error::assertion(self.label(), "no node", evaluation.text))
            } else {
                Ok(())
            }
        }
    }
}
