//! # Chapter 2: Result Pipeline
//!
//! [`WebTemplate::perform`](crate::WebTemplate::perform) returns a
//! [`ResultActions`](crate::ResultActions): a fluent chain over one executed
//! request. Every step returns a `Result`, so `?` stops at the first failure.
//!
//! ## Matchers
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # async fn run(template: WebTemplate, request: HttpRequest) -> tongs::Result<()> {
//! template
//!     .perform(request)
//!     .await?
//!     .and_expect(status().is_ok())?
//!     .and_expect(content().content_type("application/json"))?
//!     .and_expect(json_path("$.students").array_size(2))?
//!     .and_expect(json_path("$.students[0].name").value("Ann"))?
//!     .and_expect(json_path("$.teacher").does_not_exist())?;
//! # Ok(())
//! # }
//! ```
//!
//! | Factory | Checks |
//! |---------|--------|
//! | [`status()`](crate::matchers::status) | `is`, `is_ok`, `in_range`, `matches`, `reason` |
//! | [`content()`](crate::matchers::content) | `content_type`, `string`, `contains`, `matches` |
//! | [`json_path(expr)`](crate::matchers::json_path) | `value`, `matches`, `exists`, `does_not_exist`, `is_array`, `array_size` |
//! | [`xpath(expr)`](crate::matchers::xpath) | `value`, `exists`, `does_not_exist` |
//!
//! A failed check is an [`Error::Assertion`](crate::Error::Assertion) with a
//! label, the expected and the actual value:
//!
//! ```text
//! JSON path '$.students[0].name': expected "Ann" but was "Bob"
//! ```
//!
//! JSONPath reads that match several nodes yield an array of them; a single
//! match yields the node itself.
//!
//! ## Handlers
//!
//! [`print()`](crate::handlers::print) logs the request, timing and the
//! response (JSON pretty-printed) at info level through `tracing`:
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # async fn run(template: WebTemplate, request: HttpRequest) -> tongs::Result<()> {
//! template.perform(request).await?.and_do(print())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Transforms
//!
//! `and_transform` ends the chain with a derived value:
//!
//! ```no_run
//! # use std::collections::HashMap;
//! # use tongs::prelude::*;
//! # use tongs::transform;
//! # #[derive(Deserialize)] struct Student { name: String }
//! # async fn run(template: WebTemplate, request: HttpRequest) -> tongs::Result<()> {
//! let actions = template.perform(request).await?;
//!
//! let students: Vec<Student> = actions.clone().and_transform(transform::json_path("$.students").list())?;
//! let first: Student = actions.clone().and_transform(transform::json_path("$.students[0]").object())?;
//! let grades: HashMap<String, u32> = actions.clone().and_transform(transform::json_path("$.grades").map())?;
//!
//! // Continue on a sub-document
//! actions
//!     .and_transform(json().parse("$.principal"))?
//!     .and_expect(json_path("$.name").value("Zoe"))?;
//! # Ok(())
//! # }
//! ```
//!
//! With an expression, `object` parses the text of the node first and falls
//! back to the node itself, so a string node reads as a `String`.
//!
//! XML bodies use [`xml()`](crate::transform::xml): `object`, `list` (each
//! child of the root) and `map`.
//!
//! ## Your Own Steps
//!
//! Closures taking `&HttpResult` are matchers, handlers and transforms:
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # async fn run(template: WebTemplate, request: HttpRequest) -> tongs::Result<()> {
//! template
//!     .perform(request)
//!     .await?
//!     .and_expect(|result: &HttpResult| {
//!         if result.cost_time_ms() < 500 {
//!             Ok(())
//!         } else {
//!             Err(Error::assertion("Cost time", "< 500 ms", result.cost_time_ms()))
//!         }
//!     })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 3: Configuration][super::chapter_3] - Templates, properties and the registry
