//! HTTP transport trait.
//!
//! [`HttpClient`] is the seam between request building and the network.
//! The `tongs` crate provides a hyper-based implementation; tests can
//! plug in their own.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations execute one request and buffer the whole response.
/// They are shared across threads, so any internal state must be
/// synchronized.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// Non-2xx statuses are responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Invalid response
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

impl<C: HttpClient> HttpClient for Arc<C> {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        C::execute(self, request)
    }
}

impl<C: HttpClient> HttpClient for &C {
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send {
        C::execute(self, request)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::Method;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl HttpClient for Recorder {
        async fn execute(&self, request: Request<Bytes>) -> Result<Response<Bytes>> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(request.url().to_string());
            }
            Ok(Response::new(204, Vec::new(), Bytes::new()))
        }
    }

    fn request() -> Request<Bytes> {
        let url = url::Url::parse("http://localhost/ping").expect("valid URL");
        Request::builder(Method::Get, url).build()
    }

    #[test]
    fn shared_clients_delegate() {
        let recorder = Arc::new(Recorder::default());
        let shared = Arc::clone(&recorder);

        let response = block_on(shared.execute(request()));
        assert_eq!(response.expect("response").status(), 204);

        let by_ref = &*recorder;
        let response = block_on(by_ref.execute(request()));
        assert_eq!(response.expect("response").status(), 204);

        assert_eq!(recorder.seen.lock().expect("lock").len(), 2);
    }

    /// Polls a future that never returns `Pending`.
    fn block_on<F: Future>(future: F) -> F::Output {
        use std::pin::pin;
        use std::task::{Context, Poll, Waker};

        let mut future = pin!(future);
        let mut cx = Context::from_waker(Waker::noop());
        loop {
            if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
                return output;
            }
        }
    }
}
