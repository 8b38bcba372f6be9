//! # Chapter 0: Getting Started
//!
//! Your first tongs test in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Declare an [`Endpoint`](crate::Endpoint) with one operation
//! - Turn a call into an [`HttpRequest`](crate::HttpRequest)
//! - Execute it with a [`WebTemplate`](crate::WebTemplate) and assert on it
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! tongs = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ## Your First Test
//!
//! ```no_run
//! use tongs::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct Student {
//!     pub id: u64,
//!     pub name: String,
//! }
//!
//! # async fn run() -> tongs::Result<()> {
//! // Declare the API surface once
//! let students = Endpoint::builder("students")
//!     .host_port("localhost", 8080)
//!     .base_path("/api")
//!     .operation(
//!         Operation::builder("find")
//!             .path("/students/${id}")
//!             .get()
//!             .param(Param::path("id"))
//!             .build()?,
//!     )
//!     .build()?;
//!
//! // Call it, execute it, check it
//! let template = WebTemplate::builder().build();
//! let student: Student = template
//!     .perform(students.call("find", &args![42])?)
//!     .await?
//!     .and_expect(status().is_ok())?
//!     .and_transform(json().object())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## What Happens
//!
//! ```text
//! students.call("find", [42])
//!   → classify arguments by role      path: id=42
//!   → resolve host, base path, path   http://localhost:8080/api/students/${id}
//!   → assemble the buildable request  GET http://localhost:8080/api/students/42
//! template.perform(request)
//!   → build, send, time               HttpResult
//!   → global matchers, then handlers
//!   → ResultActions                   and_expect / and_do / and_transform / and_return
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 1: Parameters][super::chapter_1] - Path, query, headers, bodies and files
