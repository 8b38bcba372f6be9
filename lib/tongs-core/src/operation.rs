//! Operation declarations.

use crate::{Error, Method, Param, Result, Role};

/// One declared call of an [`Endpoint`](crate::Endpoint).
///
/// Built with [`Operation::builder`]; the builder rejects declarations
/// without exactly one HTTP verb.
#[derive(Debug, Clone)]
pub struct Operation {
    name: String,
    path: String,
    method: Method,
    content_type: Option<String>,
    accept: Option<String>,
    description: Option<String>,
    params: Vec<Param>,
}

impl Operation {
    /// Start declaring an operation named `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> OperationBuilder {
        OperationBuilder::new(name)
    }

    /// The operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sub-path, relative to the endpoint base path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The HTTP verb.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Outgoing content type override.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Accepted response media type.
    #[must_use]
    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    /// Human-readable description, defaulting to the operation name.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }

    /// Declared parameters, in call order.
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }
}

/// Builder for [`Operation`].
#[derive(Debug, Clone)]
#[must_use]
pub struct OperationBuilder {
    name: String,
    path: String,
    methods: Vec<Method>,
    content_type: Option<String>,
    accept: Option<String>,
    description: Option<String>,
    params: Vec<Param>,
}

impl OperationBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            methods: Vec::new(),
            content_type: None,
            accept: None,
            description: None,
            params: Vec::new(),
        }
    }

    /// Set the sub-path; may contain `${name}` placeholders.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Add an HTTP verb marker.
    pub fn verb(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Shorthand for `.verb(Method::Get)`.
    pub fn get(self) -> Self {
        self.verb(Method::Get)
    }

    /// Shorthand for `.verb(Method::Post)`.
    pub fn post(self) -> Self {
        self.verb(Method::Post)
    }

    /// Shorthand for `.verb(Method::Put)`.
    pub fn put(self) -> Self {
        self.verb(Method::Put)
    }

    /// Shorthand for `.verb(Method::Delete)`.
    pub fn delete(self) -> Self {
        self.verb(Method::Delete)
    }

    /// Shorthand for `.verb(Method::Patch)`.
    pub fn patch(self) -> Self {
        self.verb(Method::Patch)
    }

    /// Shorthand for `.verb(Method::Head)`.
    pub fn head(self) -> Self {
        self.verb(Method::Head)
    }

    /// Shorthand for `.verb(Method::Options)`.
    pub fn options(self) -> Self {
        self.verb(Method::Options)
    }

    /// Shorthand for `.verb(Method::Trace)`.
    pub fn trace(self) -> Self {
        self.verb(Method::Trace)
    }

    /// Set the outgoing content type.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the accepted response media type.
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a parameter.
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Validate and build the operation.
    pub fn build(self) -> Result<Operation> {
        let method = match self.methods.as_slice() {
            [method] => *method,
            [] => {
                return Err(Error::configuration(format!(
                    "operation '{}' has no HTTP method marker",
                    self.name
                )));
            }
            many => {
                return Err(Error::configuration(format!(
                    "operation '{}' has {} HTTP method markers, expected exactly one",
                    self.name,
                    many.len()
                )));
            }
        };
        for param in &self.params {
            check_marker_name(&self.name, param)?;
        }

        Ok(Operation {
            name: self.name,
            path: self.path,
            method,
            content_type: self.content_type,
            accept: self.accept,
            description: self.description,
            params: self.params,
        })
    }
}

/// Reject blank names on every role but the body (where empty means raw).
pub(crate) fn check_marker_name(owner: &str, param: &Param) -> Result<()> {
    match param.marker() {
        Some(marker) if marker.role() != Role::Body && marker.name().trim().is_empty() => Err(
            Error::configuration(format!("{owner}: {} parameter has a blank name", marker.role())),
        ),
        _ => Ok(()),
    }
}
