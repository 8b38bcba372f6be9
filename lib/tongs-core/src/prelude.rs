//! Prelude module for convenient imports.
//!
//! ```
//! use tongs_core::prelude::*;
//! ```

pub use crate::{
    Arg, ContentType, DisplayConverter, Endpoint, Error, HttpClient, HttpRequest, JsonConverter,
    Method, Operation, Param, ParamConverter, Request, Response, Result, Role, StaticParam, args,
};
