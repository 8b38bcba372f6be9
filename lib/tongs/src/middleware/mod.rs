//! Tower middleware for the [`HyperClient`](crate::HyperClient) transport.
//!
//! Layers wrap the type-erased [`BoxedService`](crate::BoxedService) and are
//! added with [`HyperClientBuilder::layer`](crate::HyperClientBuilder::layer).
//!
//! - [`LoggingLayer`] - logs every exchange with `tracing`
//! - [`CookieLayer`] - keeps server cookies per host, added by
//!   [`CookiePolicy::Keep`](crate::CookiePolicy::Keep)
//!
//! # Example
//!
//! ```no_run
//! use tongs::HyperClient;
//! use tongs::middleware::LoggingLayer;
//!
//! let client = HyperClient::builder()
//!     .layer(LoggingLayer::debug())
//!     .build();
//! ```

mod cookies;
mod logging;

pub use cookies::{CookieLayer, Cookies};
pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for convenience
pub use tower::{Layer, ServiceBuilder};
