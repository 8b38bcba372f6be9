//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, functions, and macros
//! for easy glob importing:
//!
//! ```
//! use tongs::prelude::*;
//! ```

pub use crate::handlers::print;
pub use crate::matchers::{content, json_path, status, xpath};
pub use crate::transform::{json, xml};
pub use crate::{
    Arg, ContentType, Endpoint, EndpointRegistry, Error, HttpClient, HttpRequest, HttpResult,
    HyperClient, JsonConverter, Method, Operation, Param, ParamConverter, Response, Result,
    ResultActions, ResultHandler, ResultMatcher, ResultTransform, StaticParam, StatusCode,
    WebTemplate, args,
};
pub use serde::{Deserialize, Serialize};
