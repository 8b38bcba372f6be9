//! Terminal conversions of an [`HttpResult`] into a value.
//!
//! - [`json()`] - the JSON body as a typed value, or a sub-document pipeline
//! - [`json_path()`] - the value at a JSONPath expression as a typed value
//! - [`xml()`] - the XML body as a typed value
//!
//! Any `Fn(&HttpResult) -> Result<T>` closure is a transform too.

mod json;
mod xml;

pub use json::{JsonTransformer, json, json_path};
pub use xml::{XmlTransformer, xml};

use crate::{HttpResult, Result};

/// Derives a value from an executed request.
pub trait ResultTransform<T> {
    /// Compute the value.
    ///
    /// # Errors
    ///
    /// Returns the error met while reading or converting the result.
    fn transform(&self, result: &HttpResult) -> Result<T>;
}

impl<T, F> ResultTransform<T> for F
where
    F: Fn(&HttpResult) -> Result<T>,
{
    fn transform(&self, result: &HttpResult) -> Result<T> {
        self(result)
    }
}
