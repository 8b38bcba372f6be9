//! Error types for tongs.

use derive_more::{Display, Error, From};

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for tongs operations.
///
/// Declaration mistakes surface as [`Error::Configuration`], failed
/// expectations as [`Error::Assertion`], transport problems as
/// [`Error::Connection`], [`Error::Tls`] or [`Error::Timeout`].
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The endpoint or operation declaration is unusable.
    #[display("configuration error: {_0}")]
    #[from(skip)]
    Configuration(#[error(not(source))] String),

    /// An expectation on an HTTP result did not hold.
    #[display("{label}: expected {expected} but was {actual}")]
    #[from(skip)]
    Assertion {
        /// What was checked (e.g. `status`, `JSON path $.name`).
        label: String,
        /// The expected value.
        expected: String,
        /// The observed value.
        actual: String,
    },

    /// A parameter value could not be turned into text.
    #[display("cannot convert parameter '{name}': {message}")]
    #[from(skip)]
    Conversion {
        /// Bound parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// A file to upload could not be read.
    #[display("cannot read file '{path}': {message}")]
    #[from(skip)]
    File {
        /// File path as bound.
        path: String,
        /// Error message.
        message: String,
    },

    /// A properties resource could not be loaded.
    #[display("cannot load properties '{location}': {message}")]
    #[from(skip)]
    Properties {
        /// Resource location.
        location: String,
        /// Error message.
        message: String,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },

    /// A JSONPath expression is invalid or does not match.
    #[display("JSON path '{expression}': {message}")]
    #[from(skip)]
    JsonPath {
        /// The JSONPath expression.
        expression: String,
        /// Error message.
        message: String,
    },

    /// XML parsing, XPath or XML mapping error.
    #[display("XML error: {_0}")]
    #[from(skip)]
    Xml(#[error(not(source))] String),

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_html_form::ser::Error),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an assertion error.
    #[must_use]
    pub fn assertion(
        label: impl Into<String>,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::Assertion {
            label: label.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a conversion error.
    #[must_use]
    pub fn conversion(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conversion {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a file error.
    #[must_use]
    pub fn file(path: impl Into<String>, message: impl ToString) -> Self {
        Self::File {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a properties error.
    #[must_use]
    pub fn properties(location: impl Into<String>, message: impl ToString) -> Self {
        Self::Properties {
            location: location.into(),
            message: message.to_string(),
        }
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a JSONPath error.
    #[must_use]
    pub fn json_path(expression: impl Into<String>, message: impl ToString) -> Self {
        Self::JsonPath {
            expression: expression.into(),
            message: message.to_string(),
        }
    }

    /// Create an XML error.
    #[must_use]
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns `true` if this is a failed expectation.
    #[must_use]
    pub const fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion { .. })
    }
}
