//! # Chapter 3: Configuration
//!
//! ## Templates
//!
//! A [`WebTemplate`](crate::WebTemplate) owns the transport and the checks
//! applied to every result:
//!
//! ```no_run
//! use std::time::Duration;
//! use tongs::prelude::*;
//!
//! let template = WebTemplate::builder()
//!     .timeout(Duration::from_secs(10))
//!     .connect_timeout(Duration::from_secs(2))
//!     .always_expect(status().is_success())
//!     .always_do(print())
//!     .build();
//! ```
//!
//! Global matchers run first, then global handlers; the first failure is
//! returned by `perform`.
//!
//! The default client keeps the cookies a host sets and sends them back to
//! it, so a login call opens a session for the calls after it. Pass
//! [`CookiePolicy::Ignore`](crate::CookiePolicy::Ignore) to
//! [`cookies`](crate::WebTemplateBuilder::cookies) to send only the cookies an
//! operation declares.
//!
//! Synchronous tests use
//! [`perform_blocking`](crate::WebTemplate::perform_blocking), which drives
//! the call on a runtime owned by the template.
//!
//! ## Custom Transport
//!
//! Anything implementing [`HttpClient`](crate::HttpClient) can replace the
//! default [`HyperClient`](crate::HyperClient), for instance one with tower
//! middleware:
//!
//! ```no_run
//! use tongs::prelude::*;
//! use tongs::middleware::LoggingLayer;
//!
//! # fn main() -> tongs::Result<()> {
//! let client = HyperClient::builder().layer(LoggingLayer::debug()).build();
//! let template = WebTemplate::builder().client(client).build_with_client()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Hosts from Properties
//!
//! An endpoint can read its host from a `.properties` file with the
//! `http.host` and `http.port` keys. The file is read on each call:
//!
//! ```text
//! # env/test.properties
//! http.host=staging.example.com
//! http.port=8443
//! ```
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # fn main() -> tongs::Result<()> {
//! let endpoint = Endpoint::builder("students")
//!     .host_from("env/test.properties")
//!     .base_path("/api")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! A literal host always wins over a properties file.
//!
//! ## The Registry
//!
//! An [`EndpointRegistry`](crate::EndpointRegistry) collects the endpoints of
//! a test run and caches the properties resources it reads, including
//! database settings (`sql.jdbc.*`, `mongo.*`):
//!
//! ```no_run
//! # use tongs::prelude::*;
//! # fn main() -> tongs::Result<()> {
//! # let students = Endpoint::builder("students").host("localhost").build()?;
//! let mut registry = EndpointRegistry::new();
//! registry.register(students)?;
//!
//! let settings = registry.database_settings("env/db.properties")?;
//! if let Some(sql) = settings.sql {
//!     println!("connecting to {}", sql.url);
//! }
//! # Ok(())
//! # }
//! ```
