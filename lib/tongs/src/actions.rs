//! Fluent pipeline over one executed request.

use crate::{HttpResult, Result, ResultHandler, ResultMatcher, ResultTransform};

/// Chainable assertions, side effects and transforms over an [`HttpResult`].
///
/// ```no_run
/// use tongs::prelude::*;
/// use tongs::transform;
///
/// # async fn run(template: WebTemplate) -> tongs::Result<()> {
/// let name: String = template
///     .perform(HttpRequest::get("http://localhost:8080/students/7"))
///     .await?
///     .and_expect(status().is_ok())?
///     .and_do(print())?
///     .and_transform(transform::json_path("$.name").object())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct ResultActions {
    result: HttpResult,
}

impl ResultActions {
    /// Wrap a result.
    pub const fn new(result: HttpResult) -> Self {
        Self { result }
    }

    /// The wrapped result.
    #[must_use]
    pub const fn result(&self) -> &HttpResult {
        &self.result
    }

    /// Check the result against `matcher`.
    ///
    /// # Errors
    ///
    /// Returns the matcher failure, typically an
    /// [`Error::Assertion`](crate::Error::Assertion).
    pub fn and_expect(self, matcher: impl ResultMatcher) -> Result<Self> {
        matcher.check(&self.result)?;
        Ok(self)
    }

    /// Run a side effect on the result.
    ///
    /// # Errors
    ///
    /// Returns the handler failure.
    pub fn and_do(self, handler: impl ResultHandler) -> Result<Self> {
        handler.handle(&self.result)?;
        Ok(self)
    }

    /// Derive a value from the result.
    ///
    /// # Errors
    ///
    /// Returns the transform failure.
    pub fn and_transform<T>(self, transform: impl ResultTransform<T>) -> Result<T> {
        transform.transform(&self.result)
    }

    /// The wrapped result.
    #[must_use]
    pub fn and_return(self) -> HttpResult {
        self.result
    }
}
