//! Run-scoped registry of endpoints and configuration resources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::{Arg, DatabaseSettings, Endpoint, Error, HttpRequest, Properties, Result};

/// Endpoints by name, plus a cache of loaded properties resources.
///
/// Create one per test run and pass it where endpoints are needed. Each
/// properties resource is read once, on first access.
///
/// ```
/// use tongs::{Endpoint, EndpointRegistry, Operation};
///
/// # fn main() -> tongs::Result<()> {
/// let mut registry = EndpointRegistry::new();
/// registry.register(
///     Endpoint::builder("students")
///         .host("localhost")
///         .operation(Operation::builder("list").path("/students").get().build()?)
///         .build()?,
/// )?;
///
/// let request = registry.call("students", "list", &[])?;
/// assert_eq!(request.url(), "http://localhost/students");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct EndpointRegistry {
    endpoints: HashMap<String, Arc<Endpoint>>,
    properties: Mutex<HashMap<PathBuf, Arc<Properties>>>,
}

impl EndpointRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `endpoint` under its name.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the name is already taken.
    pub fn register(&mut self, endpoint: Endpoint) -> Result<Arc<Endpoint>> {
        let name = endpoint.name().to_string();
        if self.endpoints.contains_key(&name) {
            return Err(Error::configuration(format!(
                "endpoint '{name}' is already registered"
            )));
        }
        let endpoint = Arc::new(endpoint);
        self.endpoints.insert(name, Arc::clone(&endpoint));
        Ok(endpoint)
    }

    /// The endpoint registered as `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Endpoint>> {
        self.endpoints.get(name).cloned()
    }

    /// Like [`get`](Self::get), a missing endpoint is an error.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no endpoint is registered as `name`.
    pub fn require(&self, name: &str) -> Result<Arc<Endpoint>> {
        self.get(name)
            .ok_or_else(|| Error::configuration(format!("endpoint '{name}' is not registered")))
    }

    /// Call `operation` on the endpoint registered as `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is unknown or the call fails.
    pub fn call(&self, endpoint: &str, operation: &str, args: &[Arg]) -> Result<HttpRequest> {
        self.require(endpoint)?.call(operation, args)
    }

    /// Registered endpoint names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.endpoints.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns `true` if no endpoint is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// The properties resource at `path`, loaded on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be read.
    pub fn properties(&self, path: impl AsRef<Path>) -> Result<Arc<Properties>> {
        let path = path.as_ref();
        let mut cache = self.properties.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(properties) = cache.get(path) {
            return Ok(Arc::clone(properties));
        }

        debug!(path = %path.display(), "loading properties");
        let properties = Arc::new(Properties::load(path)?);
        cache.insert(path.to_path_buf(), Arc::clone(&properties));
        Ok(properties)
    }

    /// Database settings from the properties resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be read or is incomplete.
    pub fn database_settings(&self, path: impl AsRef<Path>) -> Result<DatabaseSettings> {
        let properties = self.properties(path)?;
        DatabaseSettings::from_properties(&properties)
    }
}
