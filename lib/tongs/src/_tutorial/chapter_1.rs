//! # Chapter 1: Parameters
//!
//! How call arguments become parts of the request.
//!
//! Each [`Param`](crate::Param) carries a role: `path`, `query`, `header`,
//! `body` or `file`. Arguments are matched to parameters by position.
//!
//! ## Path Parameters
//!
//! `${name}` placeholders in the operation path are replaced by the value of
//! the path parameter with the same name:
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # fn main() -> tongs::Result<()> {
//! let find = Operation::builder("find")
//!     .path("/schools/${school}/students/${id}")
//!     .get()
//!     .param(Param::path("school"))
//!     .param(Param::path("id"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Query Parameters and Headers
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # fn main() -> tongs::Result<()> {
//! let search = Operation::builder("search")
//!     .path("/students")
//!     .get()
//!     .param(Param::query("grade"))
//!     .param(Param::query("tag"))
//!     .param(Param::header("X-Trace"))
//!     .build()?;
//! # let endpoint = Endpoint::builder("students").host("localhost").operation(search).build()?;
//!
//! // GET /students?tag=math&tag=art with X-Trace: t-1; the null grade is skipped
//! let request = endpoint.call(
//!     "search",
//!     &[Arg::Null, Arg::seq(["math", "art"]), Arg::from("t-1")],
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! - `None` and [`Arg::Null`](crate::Arg::Null) produce no binding
//! - A sequence binds each element under the declared name
//! - A map ([`Arg::map`](crate::Arg::map)) binds each entry under its own key
//!
//! Parameters bound on every call are declared on the endpoint:
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # fn main() -> tongs::Result<()> {
//! let endpoint = Endpoint::builder("students")
//!     .host("localhost")
//!     .param(StaticParam::header("X-Api-Key", "secret"))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Bodies
//!
//! Named body parameters are sent as an URL-encoded form. The empty name
//! ([`Param::raw_body`](crate::Param::raw_body)) sends the value as-is and
//! wins over named fields:
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # fn main() -> tongs::Result<()> {
//! let create = Operation::builder("create")
//!     .path("/students")
//!     .post()
//!     .content_type("application/json")
//!     .param(Param::raw_body().with_converter(JsonConverter))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Converters
//!
//! Values are turned into text by a [`ParamConverter`](crate::ParamConverter).
//! The default keeps strings verbatim and writes structures as compact JSON.
//! Any `Fn(&serde_json::Value) -> Result<String>` closure works:
//!
//! ```no_run
//! # use tongs::prelude::*;
//! let upper = Param::query("name").with_converter(|value: &serde_json::Value| {
//!     Ok::<_, Error>(value.as_str().unwrap_or_default().to_uppercase())
//! });
//! ```
//!
//! A failing converter drops that binding with a warning; the call goes on.
//!
//! ## Files
//!
//! A file parameter turns the request into `multipart/form-data`. Its value
//! is a comma-separated list of paths, each sent as one part:
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # fn main() -> tongs::Result<()> {
//! let upload = Operation::builder("upload")
//!     .path("/students/${id}/files")
//!     .post()
//!     .param(Param::path("id"))
//!     .param(Param::file("file"))
//!     .build()?;
//! # let endpoint = Endpoint::builder("students").host("localhost").operation(upload).build()?;
//!
//! let request = endpoint.call("upload", &args![7, "report.pdf, grades.csv"])?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 2: Result Pipeline][super::chapter_2] - Matchers, handlers and transforms
