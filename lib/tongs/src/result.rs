//! The record of one executed exchange.

use std::sync::OnceLock;
use std::time::Duration;

use bytes::Bytes;

use crate::{Request, Response};

/// Outcome of one request/response exchange.
///
/// The response body is decoded to text at most once; later reads return the
/// cached string.
#[derive(Debug, Clone)]
pub struct HttpResult {
    request: Request<Bytes>,
    response: Response<Bytes>,
    cost_time: Duration,
    description: Option<String>,
    content: OnceLock<String>,
}

impl HttpResult {
    /// Record an exchange.
    #[must_use]
    pub fn new(
        request: Request<Bytes>,
        response: Response<Bytes>,
        cost_time: Duration,
        description: Option<String>,
    ) -> Self {
        Self {
            request,
            response,
            cost_time,
            description,
            content: OnceLock::new(),
        }
    }

    /// A copy of this result whose string content is `content`.
    ///
    /// Request, response, timing and description are kept. Used to continue
    /// a pipeline on an extracted sub-document.
    #[must_use]
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            request: self.request.clone(),
            response: self.response.clone(),
            cost_time: self.cost_time,
            description: self.description.clone(),
            content: OnceLock::from(content.into()),
        }
    }

    /// The transport request that was sent.
    #[must_use]
    pub const fn request(&self) -> &Request<Bytes> {
        &self.request
    }

    /// The transport response that was received.
    #[must_use]
    pub const fn response(&self) -> &Response<Bytes> {
        &self.response
    }

    /// Response status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.status()
    }

    /// Wall-clock time between sending the request and receiving the body.
    #[must_use]
    pub const fn cost_time(&self) -> Duration {
        self.cost_time
    }

    /// [`cost_time`](Self::cost_time) in whole milliseconds.
    #[must_use]
    pub fn cost_time_ms(&self) -> u64 {
        u64::try_from(self.cost_time.as_millis()).unwrap_or(u64::MAX)
    }

    /// Operation description, if the request carried one.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The response body as text.
    ///
    /// Invalid UTF-8 sequences are replaced. The body is decoded on the first
    /// call only.
    #[must_use]
    pub fn response_string_content(&self) -> &str {
        self.content.get_or_init(|| self.response.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Method;

    fn sample(body: &'static str) -> HttpResult {
        let url = url::Url::parse("http://localhost/grades/1").expect("valid URL");
        let request = Request::builder(Method::Get, url).build();
        let response = Response::new(
            200,
            vec![("content-type".to_string(), "application/json".to_string())],
            Bytes::from_static(body.as_bytes()),
        );
        HttpResult::new(
            request,
            response,
            Duration::from_millis(42),
            Some("find a grade".to_string()),
        )
    }

    #[test]
    fn exposes_the_exchange() {
        let result = sample(r#"{"id":1}"#);
        assert_eq!(result.status(), 200);
        assert_eq!(result.cost_time_ms(), 42);
        assert_eq!(result.description(), Some("find a grade"));
        assert_eq!(result.request().url().path(), "/grades/1");
        assert_eq!(result.response().header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn string_content_is_read_once() {
        let result = sample(r#"{"id":1}"#);
        let first = result.response_string_content();
        let second = result.response_string_content();
        assert_eq!(first, r#"{"id":1}"#);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn with_content_replaces_the_text_only() {
        let result = sample(r#"{"student":{"name":"Ann"}}"#);
        let derived = result.with_content(r#"{"name":"Ann"}"#);
        assert_eq!(derived.response_string_content(), r#"{"name":"Ann"}"#);
        assert_eq!(derived.status(), 200);
        assert_eq!(derived.cost_time(), result.cost_time());
        assert_eq!(result.response_string_content(), r#"{"student":{"name":"Ann"}}"#);
    }
}
