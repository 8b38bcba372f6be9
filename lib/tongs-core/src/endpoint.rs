//! Endpoint declarations.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::operation::check_marker_name;
use crate::{Arg, Error, HttpRequest, Operation, RequestProxy, Result, StaticParam};

/// A hand-written operation composed from other operations.
pub type Fallback = Arc<dyn Fn(&Endpoint, &[Arg]) -> Result<HttpRequest> + Send + Sync>;

/// Where the endpoint host comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSource {
    /// A literal host with an optional port.
    Literal {
        /// Host name, optionally with a scheme.
        host: String,
        /// Port appended as `:port`.
        port: Option<u16>,
    },
    /// A properties file with `http.host` and optional `http.port` keys,
    /// read when a request is resolved.
    Properties(PathBuf),
}

/// A declared API surface: host, base path, static parameters and operations.
///
/// Endpoints are immutable once built and can be shared across threads.
///
/// # Example
///
/// ```
/// use tongs_core::{Arg, Endpoint, Operation, Param};
///
/// # fn main() -> tongs_core::Result<()> {
/// let endpoint = Endpoint::builder("items")
///     .host_port("api.example.com", 8080)
///     .base_path("/v1")
///     .operation(
///         Operation::builder("get_item")
///             .path("/items/${id}/")
///             .get()
///             .param(Param::path("id"))
///             .build()?,
///     )
///     .build()?;
///
/// let request = endpoint.call("get_item", &[Arg::from(7)])?;
/// assert_eq!(request.url(), "http://api.example.com:8080/v1/items/7");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Endpoint {
    name: String,
    host: HostSource,
    base_path: String,
    statics: Vec<StaticParam>,
    operations: HashMap<String, Operation>,
    fallbacks: HashMap<String, Fallback>,
}

impl Endpoint {
    /// Start declaring an endpoint.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> EndpointBuilder {
        EndpointBuilder::new(name)
    }

    /// The endpoint name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The host source.
    #[must_use]
    pub const fn host(&self) -> &HostSource {
        &self.host
    }

    /// The base path applied to every operation.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Parameters bound on every call.
    #[must_use]
    pub fn statics(&self) -> &[StaticParam] {
        &self.statics
    }

    /// A declared operation by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    /// A fallback operation by name.
    #[must_use]
    pub fn fallback(&self, name: &str) -> Option<&Fallback> {
        self.fallbacks.get(name)
    }

    /// Names of all operations, declared and fallback, sorted.
    #[must_use]
    pub fn operation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .operations
            .keys()
            .chain(self.fallbacks.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    /// Build the request for `operation` with `args`.
    pub fn call(&self, operation: &str, args: &[Arg]) -> Result<HttpRequest> {
        RequestProxy.invoke(self, operation, args)
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("base_path", &self.base_path)
            .field("statics", &self.statics)
            .field("operations", &self.operations)
            .field("fallbacks", &self.fallbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`Endpoint`].
#[must_use]
pub struct EndpointBuilder {
    name: String,
    host: Option<String>,
    port: Option<u16>,
    properties: Option<PathBuf>,
    base_path: String,
    statics: Vec<StaticParam>,
    operations: Vec<Operation>,
    fallbacks: Vec<(String, Fallback)>,
}

impl EndpointBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: None,
            port: None,
            properties: None,
            base_path: String::new(),
            statics: Vec::new(),
            operations: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    /// Set a literal host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port appended to the literal host.
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set a literal host and port.
    pub fn host_port(self, host: impl Into<String>, port: u16) -> Self {
        self.host(host).port(port)
    }

    /// Read `http.host` and `http.port` from a properties file.
    ///
    /// Only used when no literal host is set.
    pub fn host_from(mut self, location: impl Into<PathBuf>) -> Self {
        self.properties = Some(location.into());
        self
    }

    /// Set the base path.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Add a parameter bound on every call.
    pub fn param(mut self, param: StaticParam) -> Self {
        self.statics.push(param);
        self
    }

    /// Add a declared operation.
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Add a fallback operation, run instead of the request-building engine.
    pub fn fallback<F>(mut self, name: impl Into<String>, fallback: F) -> Self
    where
        F: Fn(&Endpoint, &[Arg]) -> Result<HttpRequest> + Send + Sync + 'static,
    {
        self.fallbacks.push((name.into(), Arc::new(fallback)));
        self
    }

    /// Validate and build the endpoint.
    pub fn build(self) -> Result<Endpoint> {
        let host = match (self.host, self.properties) {
            (Some(host), _) if !host.trim().is_empty() => HostSource::Literal {
                host: host.trim().to_string(),
                port: self.port,
            },
            (_, Some(location)) => HostSource::Properties(location),
            _ => {
                return Err(Error::configuration(format!(
                    "endpoint '{}': Host is not defined",
                    self.name
                )));
            }
        };

        for static_param in &self.statics {
            check_marker_name(&self.name, static_param.param())?;
        }

        let mut operations = HashMap::with_capacity(self.operations.len());
        for operation in self.operations {
            let name = operation.name().to_string();
            if operations.insert(name.clone(), operation).is_some() {
                return Err(duplicate(&self.name, &name));
            }
        }
        let mut fallbacks = HashMap::with_capacity(self.fallbacks.len());
        for (name, fallback) in self.fallbacks {
            if operations.contains_key(&name) || fallbacks.contains_key(&name) {
                return Err(duplicate(&self.name, &name));
            }
            fallbacks.insert(name, fallback);
        }

        Ok(Endpoint {
            name: self.name,
            host,
            base_path: self.base_path,
            statics: self.statics,
            operations,
            fallbacks,
        })
    }
}

fn duplicate(endpoint: &str, operation: &str) -> Error {
    Error::configuration(format!(
        "endpoint '{endpoint}' declares operation '{operation}' more than once"
    ))
}
