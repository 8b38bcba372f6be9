//! Cookie jar middleware.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};

use bytes::Bytes;
use tower::{Layer, Service};
use tracing::debug;

use crate::{Error, Request, Response, Result, ServiceFuture};

/// Cookies received per host, in arrival order.
///
/// Only the host scopes a cookie; attributes other than `Max-Age=0` are
/// ignored.
#[derive(Debug, Default)]
struct CookieJar {
    hosts: HashMap<String, Vec<(String, String)>>,
}

impl CookieJar {
    fn store(&mut self, host: &str, set_cookie: &str) {
        let pair = set_cookie.split(';').next().unwrap_or_default();
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let expired = set_cookie.split(';').skip(1).any(|attribute| {
            let attribute = attribute.trim();
            attribute.eq_ignore_ascii_case("max-age=0")
        });

        let cookies = self.hosts.entry(host.to_string()).or_default();
        cookies.retain(|(existing, _)| existing != name);
        if expired {
            debug!(host, name, "cookie removed");
        } else {
            debug!(host, name, "cookie stored");
            cookies.push((name.to_string(), value.trim().to_string()));
        }
    }

    fn header_for(&self, host: &str, already_sent: Option<&str>) -> Option<String> {
        let cookies = self.hosts.get(host)?;
        let sent: Vec<&str> = already_sent
            .into_iter()
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.split_once('=').map(|(name, _)| name.trim()))
            .collect();

        let mut parts: Vec<String> = already_sent.map(str::to_string).into_iter().collect();
        parts.extend(
            cookies
                .iter()
                .filter(|(name, _)| !sent.contains(&name.as_str()))
                .map(|(name, value)| format!("{name}={value}")),
        );
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}

/// Layer that keeps the cookies a server sets and replays them to that host.
///
/// Every service produced by one layer shares the same jar.
#[derive(Debug, Clone, Default)]
pub struct CookieLayer {
    jar: Arc<Mutex<CookieJar>>,
}

impl CookieLayer {
    /// Create a layer with an empty jar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> Layer<S> for CookieLayer {
    type Service = Cookies<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Cookies {
            inner,
            jar: Arc::clone(&self.jar),
        }
    }
}

/// Service that adds stored cookies to requests and records `Set-Cookie` headers.
#[derive(Debug, Clone)]
pub struct Cookies<S> {
    inner: S,
    jar: Arc<Mutex<CookieJar>>,
}

impl<S> Service<Request<Bytes>> for Cookies<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let host = request.url().host_str().unwrap_or_default().to_string();
        let cookie = self
            .jar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .header_for(&host, request.header("cookie"));

        let request = match cookie {
            Some(cookie) => with_cookie_header(request, cookie),
            None => request,
        };

        let jar = Arc::clone(&self.jar);
        let mut inner = self.inner.clone();
        Box::pin(async move {
            let response = inner.call(request).await?;
            let mut jar = jar.lock().unwrap_or_else(PoisonError::into_inner);
            response
                .headers()
                .iter()
                .filter(|(name, _)| name.eq_ignore_ascii_case("set-cookie"))
                .for_each(|(_, value)| jar.store(&host, value));
            Ok::<_, Error>(response)
        })
    }
}

fn with_cookie_header(request: Request<Bytes>, cookie: String) -> Request<Bytes> {
    let (method, url, headers, body) = request.into_parts();
    let builder = Request::builder(method, url)
        .headers(
            headers
                .into_iter()
                .filter(|(name, _)| !name.eq_ignore_ascii_case("cookie")),
        )
        .header("Cookie", cookie);
    match body {
        Some(body) => builder.body(body).build(),
        None => builder.build(),
    }
}
