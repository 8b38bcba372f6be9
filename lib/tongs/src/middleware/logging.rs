//! Exchange logging middleware.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::{Instrument, Level, debug, info, span, warn};

use crate::{Error, Request, Response, Result};

/// Layer that logs every transport exchange.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingLayer {
    level: LogLevel,
}

/// Verbosity of the logging middleware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level, with headers and body sizes.
    Debug,
    /// Info level, summary only.
    #[default]
    Info,
}

impl LoggingLayer {
    /// Create a new logging layer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging layer that logs at debug level.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
        }
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = Logging<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Logging {
            inner,
            level: self.level,
        }
    }
}

/// Service that logs requests and responses.
#[derive(Debug, Clone)]
pub struct Logging<S> {
    inner: S,
    level: LogLevel,
}

impl<S> Service<Request<Bytes>> for Logging<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let method = request.method();
        let url = request.url().to_string();
        let level = self.level;

        let span = span!(Level::INFO, "http_exchange", %method, %url);

        let mut inner = self.inner.clone();
        Box::pin(
            async move {
                let start = Instant::now();

                match level {
                    LogLevel::Debug => {
                        debug!(
                            headers = ?request.headers(),
                            body_bytes = request.body().map_or(0, Bytes::len),
                            "sending request"
                        );
                    }
                    LogLevel::Info => info!("sending request"),
                }

                let result = inner.call(request).await;
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

                match &result {
                    Ok(response) if level == LogLevel::Debug => {
                        debug!(
                            status = response.status(),
                            elapsed_ms,
                            headers = ?response.headers(),
                            body_bytes = response.body().len(),
                            "response received"
                        );
                    }
                    Ok(response) => info!(status = response.status(), elapsed_ms, "response received"),
                    Err(err) => warn!(error = %err, elapsed_ms, "exchange failed"),
                }

                result
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use tower::ServiceExt;
    use tower::service_fn;

    use super::*;
    use crate::Method;

    #[test]
    fn logging_layer_levels() {
        assert_eq!(LoggingLayer::new().level, LogLevel::Info);
        assert_eq!(LoggingLayer::debug().level, LogLevel::Debug);
    }

    #[tokio::test]
    async fn logging_passes_responses_through() {
        let inner = service_fn(|_: Request<Bytes>| async {
            Ok::<_, Error>(Response::new(418, Vec::new(), Bytes::from("teapot")))
        });
        let service = LoggingLayer::debug().layer(inner);

        let url = url::Url::parse("http://localhost/tea").expect("valid URL");
        let response = service
            .oneshot(Request::builder(Method::Get, url).build())
            .await
            .expect("response");

        assert_eq!(response.status(), 418);
        assert_eq!(response.body().as_ref(), b"teapot");
    }

    #[tokio::test]
    async fn logging_passes_errors_through() {
        let inner = service_fn(|_: Request<Bytes>| async { Err::<Response<Bytes>, _>(Error::Timeout) });
        let service = LoggingLayer::new().layer(inner);

        let url = url::Url::parse("http://localhost/slow").expect("valid URL");
        let err = service
            .oneshot(Request::builder(Method::Get, url).build())
            .await
            .expect_err("timeout");

        assert!(err.is_timeout());
    }
}
