//! Declarative HTTP test client for Rust.
//!
//! Describe an API surface once as an [`Endpoint`], call its operations to
//! get a buildable [`HttpRequest`], run it through a [`WebTemplate`] and
//! assert on the outcome with a fluent [`ResultActions`] pipeline.
//!
//! # Example
//!
//! ```no_run
//! use tongs::prelude::*;
//!
//! # async fn run() -> tongs::Result<()> {
//! let grades = Endpoint::builder("grades")
//!     .host("api.example.com")
//!     .port(8080)
//!     .base_path("/v1")
//!     .operation(
//!         Operation::builder("find")
//!             .path("/grades/${id}")
//!             .get()
//!             .param(Param::path("id"))
//!             .build()?,
//!     )
//!     .build()?;
//!
//! let template = WebTemplate::builder().build();
//! let student = template
//!     .perform(grades.call("find", &args![42])?)
//!     .await?
//!     .and_expect(status().is_ok())?
//!     .and_expect(json_path("$.name").exists())?
//!     .and_transform(json().value())?;
//! # Ok(())
//! # }
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod actions;
mod client;
mod config;
mod connector;
pub mod handlers;
mod jsonpath;
pub mod matchers;
pub mod middleware;
pub mod prelude;
mod registry;
mod result;
mod settings;
mod template;
pub mod transform;

pub use actions::ResultActions;
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder, CookiePolicy};
pub use handlers::ResultHandler;
pub use matchers::ResultMatcher;
pub use registry::EndpointRegistry;
pub use result::HttpResult;
pub use settings::{DatabaseSettings, MongoSettings, SqlSettings};
pub use template::{WebTemplate, WebTemplateBuilder};
pub use transform::ResultTransform;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use tongs_core::{
    Arg, ContentType, DisplayConverter, Endpoint, EndpointBuilder, Error, Fallback, Form,
    HostSource, HttpClient, HttpRequest, JsonConverter, Method, MultipartBody, Operation,
    OperationBuilder, Param, ParamConverter, Part, Properties, Request, RequestBody,
    RequestBuilder, RequestKind, RequestProxy, Response, Result, Role, SimpleBody, StaticParam,
    args, from_json, to_form, to_json,
};

// Re-export http types for status codes and headers
pub use tongs_core::{StatusCode, header};
