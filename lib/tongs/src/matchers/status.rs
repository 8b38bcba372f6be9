//! Status line matchers.

use std::ops::RangeInclusive;

use super::ResultMatcher;
use crate::{Error, HttpResult};

/// Factory for status matchers.
#[must_use]
pub const fn status() -> StatusMatchers {
    StatusMatchers
}

/// Matchers on the response status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusMatchers;

impl StatusMatchers {
    /// The status code equals `expected`.
    #[must_use]
    pub fn is(self, expected: u16) -> impl ResultMatcher {
        move |result: &HttpResult| {
            let actual = result.status();
            if actual == expected {
                Ok(())
            } else {
                Err(Error::assertion("Status", expected, actual))
            }
        }
    }

    /// The status code is 200.
    #[must_use]
    pub fn is_ok(self) -> impl ResultMatcher {
        self.is(200)
    }

    /// The status code is within `range`.
    #[must_use]
    pub fn in_range(self, range: RangeInclusive<u16>) -> impl ResultMatcher {
        move |result: &HttpResult| {
            let actual = result.status();
            if range.contains(&actual) {
                Ok(())
            } else {
                Err(Error::assertion(
                    "Status",
                    format!("{}..={}", range.start(), range.end()),
                    actual,
                ))
            }
        }
    }

    /// The status code is 2xx.
    #[must_use]
    pub fn is_success(self) -> impl ResultMatcher {
        self.in_range(200..=299)
    }

    /// The status code is 4xx.
    #[must_use]
    pub fn is_client_error(self) -> impl ResultMatcher {
        self.in_range(400..=499)
    }

    /// The status code is 5xx.
    #[must_use]
    pub fn is_server_error(self) -> impl ResultMatcher {
        self.in_range(500..=599)
    }

    /// The status code satisfies `predicate`, described by `description`.
    #[must_use]
    pub fn matches<P>(self, description: impl Into<String>, predicate: P) -> impl ResultMatcher
    where
        P: Fn(u16) -> bool + Send + Sync,
    {
        let description = description.into();
        move |result: &HttpResult| {
            let actual = result.status();
            if predicate(actual) {
                Ok(())
            } else {
                Err(Error::assertion("Status", &description, actual))
            }
        }
    }

    /// The reason phrase of the status line equals `expected`.
    ///
    /// The phrase sent by the server is used when the transport recorded it,
    /// the canonical phrase of the code otherwise.
    #[must_use]
    pub fn reason(self, expected: impl Into<String>) -> impl ResultMatcher {
        let expected = expected.into();
        move |result: &HttpResult| {
            let actual = result.response().reason().unwrap_or_default();
            if actual == expected {
                Ok(())
            } else {
                Err(Error::assertion("Status reason", &expected, actual))
            }
        }
    }
}
