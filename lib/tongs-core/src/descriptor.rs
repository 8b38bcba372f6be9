//! Request descriptor resolution.
//!
//! Resolves the host, the absolute URL template and the content
//! negotiation headers of one invocation.

use tracing::debug;

use crate::{ClassifiedParams, Endpoint, HostSource, Method, Operation, Properties, Result};

/// Properties key holding the host.
pub const HTTP_HOST_KEY: &str = "http.host";
/// Properties key holding the port.
pub const HTTP_PORT_KEY: &str = "http.port";

/// The resolved plan for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Absolute URL, still holding `${name}` placeholders.
    pub url: String,
    /// HTTP verb.
    pub method: Method,
    /// Outgoing content type.
    pub content_type: Option<String>,
    /// Accepted response media type.
    pub accept: Option<String>,
    /// Human-readable description.
    pub description: String,
    /// Classified bindings.
    pub params: ClassifiedParams,
}

impl RequestDescriptor {
    /// Resolve the descriptor of `operation` on `endpoint`.
    pub fn resolve(
        endpoint: &Endpoint,
        operation: &Operation,
        params: ClassifiedParams,
    ) -> Result<Self> {
        let host = resolve_host(endpoint.host())?;
        let url = format!(
            "{host}{}{}",
            normalize_path(endpoint.base_path()),
            normalize_path(operation.path())
        );
        debug!(endpoint = endpoint.name(), operation = operation.name(), %url, "resolved descriptor");

        Ok(Self {
            url,
            method: operation.method(),
            content_type: operation.content_type().map(ToString::to_string),
            accept: operation.accept().map(ToString::to_string),
            description: operation.description().to_string(),
            params,
        })
    }
}

/// Resolve a host source into `scheme://host[:port]`.
///
/// Hosts without a scheme are prefixed with `http://`.
pub fn resolve_host(source: &HostSource) -> Result<String> {
    let authority = match source {
        HostSource::Literal { host, port } => with_port(host, *port),
        HostSource::Properties(location) => {
            let properties = Properties::load(location)?;
            let host = properties.require(HTTP_HOST_KEY)?;
            let port = properties.get_parsed::<u16>(HTTP_PORT_KEY)?;
            with_port(host, port)
        }
    };

    if authority.contains("://") {
        Ok(authority)
    } else {
        Ok(format!("http://{authority}"))
    }
}

fn with_port(host: &str, port: Option<u16>) -> String {
    match port {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Normalize a path segment.
///
/// Non-empty segments get exactly one leading `/` and no trailing `/`;
/// a segment made only of slashes becomes empty.
///
/// ```
/// use tongs_core::normalize_path;
///
/// assert_eq!(normalize_path("items/${id}//"), "/items/${id}");
/// assert_eq!(normalize_path("///"), "");
/// ```
#[must_use]
pub fn normalize_path(segment: &str) -> String {
    let inner = segment.trim_start_matches('/').trim_end_matches('/');
    if inner.is_empty() {
        String::new()
    } else {
        format!("/{inner}")
    }
}
