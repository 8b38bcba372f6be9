//! Parameter role declarations.
//!
//! A [`Param`] describes where a call-time argument goes in the request.
//! It carries an ordered list of role markers; only the first one is
//! honored, the rest are ignored. A parameter without any marker
//! contributes nothing.

use std::fmt;
use std::sync::Arc;

use crate::{Arg, DisplayConverter, ParamConverter};

/// Where a bound value goes in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Substituted into `${name}` placeholders of the URL template.
    Path,
    /// Query string parameter.
    Query,
    /// Request header.
    Header,
    /// Form field, or the raw body when the name is empty.
    Body,
    /// File upload, the value is a file path.
    File,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::Query => write!(f, "query"),
            Self::Header => write!(f, "header"),
            Self::Body => write!(f, "body"),
            Self::File => write!(f, "file"),
        }
    }
}

/// A single role marker: role, parameter name and converter.
#[derive(Clone)]
pub struct RoleMarker {
    role: Role,
    name: String,
    converter: Option<Arc<dyn ParamConverter>>,
}

impl RoleMarker {
    /// Create a marker using the default converter.
    #[must_use]
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self {
            role,
            name: name.into(),
            converter: None,
        }
    }

    /// The marker role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// The parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The converter applied to bound values.
    #[must_use]
    pub fn converter(&self) -> &dyn ParamConverter {
        self.converter.as_deref().unwrap_or(&DisplayConverter)
    }
}

impl fmt::Debug for RoleMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleMarker")
            .field("role", &self.role)
            .field("name", &self.name)
            .field("converter", &self.converter().name())
            .finish()
    }
}

/// A declared operation parameter.
///
/// # Example
///
/// ```
/// use tongs_core::{JsonConverter, Param, Role};
///
/// let param = Param::body("tester").with_converter(JsonConverter);
/// let marker = param.marker().expect("marked");
/// assert_eq!(marker.role(), Role::Body);
/// assert_eq!(marker.name(), "tester");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Param {
    markers: Vec<RoleMarker>,
}

impl Param {
    /// A parameter without role marker, ignored at call time.
    #[must_use]
    pub fn unmarked() -> Self {
        Self::default()
    }

    /// A parameter with a single marker.
    #[must_use]
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self::unmarked().with_marker(role, name)
    }

    /// A path placeholder parameter.
    #[must_use]
    pub fn path(name: impl Into<String>) -> Self {
        Self::new(Role::Path, name)
    }

    /// A query parameter.
    #[must_use]
    pub fn query(name: impl Into<String>) -> Self {
        Self::new(Role::Query, name)
    }

    /// A header parameter.
    #[must_use]
    pub fn header(name: impl Into<String>) -> Self {
        Self::new(Role::Header, name)
    }

    /// A form body field.
    #[must_use]
    pub fn body(name: impl Into<String>) -> Self {
        Self::new(Role::Body, name)
    }

    /// The raw request body (a body marker with an empty name).
    #[must_use]
    pub fn raw_body() -> Self {
        Self::new(Role::Body, "")
    }

    /// A file upload parameter.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(Role::File, name)
    }

    /// Append another marker. Only the first marker is honored.
    #[must_use]
    pub fn with_marker(mut self, role: Role, name: impl Into<String>) -> Self {
        self.markers.push(RoleMarker::new(role, name));
        self
    }

    /// Set the converter of the most recently added marker.
    #[must_use]
    pub fn with_converter(mut self, converter: impl ParamConverter + 'static) -> Self {
        if let Some(marker) = self.markers.last_mut() {
            marker.converter = Some(Arc::new(converter));
        }
        self
    }

    /// The honored marker, if any.
    #[must_use]
    pub fn marker(&self) -> Option<&RoleMarker> {
        self.markers.first()
    }

    /// All declared markers, in declaration order.
    #[must_use]
    pub fn markers(&self) -> &[RoleMarker] {
        &self.markers
    }
}

/// A constant value bound on every call of an endpoint.
#[derive(Debug, Clone)]
pub struct StaticParam {
    param: Param,
    value: Arg,
}

impl StaticParam {
    /// Bind `value` according to `param`.
    #[must_use]
    pub fn new(param: Param, value: impl Into<Arg>) -> Self {
        Self {
            param,
            value: value.into(),
        }
    }

    /// A static query parameter.
    #[must_use]
    pub fn query(name: impl Into<String>, value: impl Into<Arg>) -> Self {
        Self::new(Param::query(name), value)
    }

    /// A static header.
    #[must_use]
    pub fn header(name: impl Into<String>, value: impl Into<Arg>) -> Self {
        Self::new(Param::header(name), value)
    }

    /// The declared parameter.
    #[must_use]
    pub const fn param(&self) -> &Param {
        &self.param
    }

    /// The bound value.
    #[must_use]
    pub const fn value(&self) -> &Arg {
        &self.value
    }
}
