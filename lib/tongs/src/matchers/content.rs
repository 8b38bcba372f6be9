//! Body and content type matchers.

use super::ResultMatcher;
use crate::{Error, HttpResult, header};

/// Factory for content matchers.
#[must_use]
pub const fn content() -> ContentMatchers {
    ContentMatchers
}

/// Matchers on the response body and its content type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentMatchers;

impl ContentMatchers {
    /// The media type of `Content-Type` equals `expected`.
    ///
    /// Parameters such as `charset` are ignored on both sides, and the
    /// comparison is case-insensitive. When the response repeats the header,
    /// the first value is the one checked.
    #[must_use]
    pub fn content_type(self, expected: impl Into<String>) -> impl ResultMatcher {
        let expected = expected.into();
        move |result: &HttpResult| {
            let actual = result
                .response()
                .header(header::CONTENT_TYPE.as_str())
                .unwrap_or_default();
            if media_type(actual).eq_ignore_ascii_case(media_type(&expected)) {
                Ok(())
            } else {
                Err(Error::assertion("Content type", &expected, actual))
            }
        }
    }

    /// The body text equals `expected`.
    #[must_use]
    pub fn string(self, expected: impl Into<String>) -> impl ResultMatcher {
        let expected = expected.into();
        move |result: &HttpResult| {
            let actual = result.response_string_content();
            if actual == expected {
                Ok(())
            } else {
                Err(Error::assertion("Response content", &expected, actual))
            }
        }
    }

    /// The body text contains `fragment`.
    #[must_use]
    pub fn contains(self, fragment: impl Into<String>) -> impl ResultMatcher {
        let fragment = fragment.into();
        move |result: &HttpResult| {
            let actual = result.response_string_content();
            if actual.contains(fragment.as_str()) {
                Ok(())
            } else {
                Err(Error::assertion(
                    "Response content",
                    format!("a string containing '{fragment}'"),
                    actual,
                ))
            }
        }
    }

    /// The body text satisfies `predicate`, described by `description`.
    #[must_use]
    pub fn matches<P>(self, description: impl Into<String>, predicate: P) -> impl ResultMatcher
    where
        P: Fn(&str) -> bool + Send + Sync,
    {
        let description = description.into();
        move |result: &HttpResult| {
            let actual = result.response_string_content();
            if predicate(actual) {
                Ok(())
            } else {
                Err(Error::assertion("Response content", &description, actual))
            }
        }
    }
}

fn media_type(content_type: &str) -> &str {
    content_type
        .split_once(';')
        .map_or(content_type, |(media, _)| media)
        .trim()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert2::{check, let_assert};
    use bytes::Bytes;

    use super::*;
    use crate::matchers::fixtures::result;
    use crate::{Method, Request, Response};

    #[test]
    fn content_type_ignores_parameters() {
        let json = result(200, "application/json; charset=utf-8", "{}");
        check!(content().content_type("application/json").check(&json).is_ok());
        check!(content().content_type("Application/JSON").check(&json).is_ok());

        let_assert!(Err(err) = content().content_type("application/xml").check(&json));
        check!(err.to_string() == "Content type: expected application/xml but was application/json; charset=utf-8");
    }

    #[test]
    fn first_of_repeated_content_types_is_checked() {
        let url = url::Url::parse("http://localhost/students").expect("valid URL");
        let response = Response::new(
            200,
            vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "text/plain".to_string()),
            ],
            Bytes::from_static(b"{}"),
        );
        let result = HttpResult::new(
            Request::builder(Method::Get, url).build(),
            response,
            Duration::ZERO,
            None,
        );

        check!(content().content_type("application/json").check(&result).is_ok());
        let_assert!(Err(err) = content().content_type("text/plain").check(&result));
        check!(err.to_string().ends_with("but was application/json"));
    }

    #[test]
    fn body_string_and_contains() {
        let text = result(200, "text/plain", "hello grades");
        check!(content().string("hello grades").check(&text).is_ok());
        check!(content().string("hello").check(&text).is_err());
        check!(content().contains("grades").check(&text).is_ok());

        let_assert!(Err(err) = content().contains("students").check(&text));
        check!(err.to_string().contains("a string containing 'students'"));
    }

    #[test]
    fn body_matches_predicate() {
        let text = result(200, "text/plain", "42");
        check!(
            content()
                .matches("a number", |body| body.parse::<u32>().is_ok())
                .check(&text)
                .is_ok()
        );
        check!(content().matches("empty", str::is_empty).check(&text).is_err());
    }
}
