//! Core types for the tongs declarative HTTP test client.
//!
//! This crate holds the request-building engine:
//! - [`Endpoint`] and [`Operation`] - declared API surfaces
//! - [`Param`], [`StaticParam`] and [`Arg`] - parameter roles and call-time values
//! - [`ParamConverter`] - value to text conversion
//! - [`classify`], [`RequestDescriptor`] and [`assemble`] - the build pipeline
//! - [`RequestProxy`] - stateless operation dispatch
//! - [`HttpRequest`] - the buildable request, simple or multipart
//! - [`Request`], [`Response`] and [`HttpClient`] - the transport seam
//! - [`Error`] and [`Result`] - Error handling
//! - [`Properties`] - `.properties` configuration resources

mod arg;
mod assemble;
mod bindings;
mod body;
mod classify;
mod client;
mod convert;
mod descriptor;
mod endpoint;
mod error;
mod http_request;
mod method;
mod multipart;
mod operation;
mod param;
pub mod prelude;
mod properties;
mod proxy;
mod request;
mod response;
mod template;

pub use arg::Arg;
pub use assemble::{FILE_SEPARATOR, assemble, select_variant};
pub use bindings::{Bindings, ClassifiedParams};
pub use body::{ContentType, from_json, from_json_value, to_form, to_json};
pub use classify::classify;
pub use client::HttpClient;
pub use convert::{DisplayConverter, JsonConverter, ParamConverter};
pub use descriptor::{
    HTTP_HOST_KEY, HTTP_PORT_KEY, RequestDescriptor, normalize_path, resolve_host,
};
pub use endpoint::{Endpoint, EndpointBuilder, Fallback, HostSource};
pub use error::{Error, Result};
pub use http_request::{HttpRequest, MultipartBody, RequestBody, RequestKind, SimpleBody};
pub use method::Method;
pub use multipart::{Form, Part};
pub use operation::{Operation, OperationBuilder};
pub use param::{Param, Role, RoleMarker, StaticParam};
pub use properties::Properties;
pub use proxy::RequestProxy;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use template::UrlTemplate;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
