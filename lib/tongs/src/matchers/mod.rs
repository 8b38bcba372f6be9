//! Assertions over an [`HttpResult`].
//!
//! A matcher checks one aspect of a result and fails with
//! [`Error::Assertion`](crate::Error::Assertion) on mismatch. Start from one
//! of the factories:
//!
//! - [`status()`] - status code and reason phrase
//! - [`content()`] - content type and body text
//! - [`json_path()`] - values inside a JSON body
//! - [`xpath()`] - values inside an XML body
//!
//! Any `Fn(&HttpResult) -> Result<()>` closure is a matcher too.
//!
//! ```
//! use tongs::matchers::{json_path, status};
//!
//! let matchers = (status().is_ok(), json_path("$.name").value("Ann"));
//! ```

mod content;
mod json_path;
mod status;
mod xpath;

pub use content::{ContentMatchers, content};
pub use json_path::{JsonPathMatchers, json_path};
pub use status::{StatusMatchers, status};
pub use xpath::{XPathMatchers, xpath};

use crate::{HttpResult, Result};

/// A check applied to an executed request.
pub trait ResultMatcher: Send + Sync {
    /// Check the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Assertion`](crate::Error::Assertion) when the result
    /// does not match, or the error met while reading the result.
    fn check(&self, result: &HttpResult) -> Result<()>;
}

impl<F> ResultMatcher for F
where
    F: Fn(&HttpResult) -> Result<()> + Send + Sync,
{
    fn check(&self, result: &HttpResult) -> Result<()> {
        self(result)
    }
}
