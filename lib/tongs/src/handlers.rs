//! Side effects over an [`HttpResult`].
//!
//! - [`print()`] - logs the whole exchange through `tracing`
//!
//! Any `Fn(&HttpResult) -> Result<()>` closure is a handler too.

use tracing::info;

use crate::{ContentType, HttpResult, Result, header};

/// A side effect applied to an executed request.
pub trait ResultHandler: Send + Sync {
    /// Handle the result.
    ///
    /// # Errors
    ///
    /// Returns the error met by the side effect.
    fn handle(&self, result: &HttpResult) -> Result<()>;
}

impl<F> ResultHandler for F
where
    F: Fn(&HttpResult) -> Result<()> + Send + Sync,
{
    fn handle(&self, result: &HttpResult) -> Result<()> {
        self(result)
    }
}

/// Handler that logs the request and the response at info level.
#[must_use]
pub const fn print() -> PrintHandler {
    PrintHandler
}

/// See [`print()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintHandler;

impl ResultHandler for PrintHandler {
    fn handle(&self, result: &HttpResult) -> Result<()> {
        let request = result.request();
        let response = result.response();
        let request_line = format!("{} {}", request.method(), request.url());
        let status_line = format!(
            "{} {}",
            response.status(),
            response.reason().unwrap_or_default()
        );
        let content = pretty_json(result.response_string_content());

        info!(
            description = result.description().unwrap_or_default(),
            request_line = %request_line,
            request_headers = ?request.headers(),
            request_body = %request_body(result),
            cost_time_ms = result.cost_time_ms(),
            status_line = %status_line,
            response_headers = ?response.headers(),
            "HTTP exchange\n{content}",
        );
        Ok(())
    }
}

/// Printable form of the request body.
///
/// Form bodies are shown decoded, multipart bodies by size only.
fn request_body(result: &HttpResult) -> String {
    let request = result.request();
    let Some(body) = request.body() else {
        return String::new();
    };
    let content_type = request
        .header(header::CONTENT_TYPE.as_str())
        .unwrap_or_default();

    if ContentType::MultipartFormData.matches(content_type) {
        format!("<multipart body of {} bytes>", body.len())
    } else if ContentType::FormUrlEncoded.matches(content_type) {
        url::form_urlencoded::parse(body)
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    } else {
        String::from_utf8_lossy(body).into_owned()
    }
}

/// Pretty-print JSON text, anything else is returned unchanged.
fn pretty_json(content: &str) -> String {
    serde_json::from_str::<serde_json::Value>(content)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| content.to_string())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bytes::Bytes;

    use super::*;
    use crate::{Method, Request, Response};

    fn post_result(content_type: &str, body: &'static str) -> HttpResult {
        let url = url::Url::parse("http://localhost/students").expect("valid URL");
        let request = Request::builder(Method::Post, url)
            .header("Content-Type", content_type)
            .body(Bytes::from_static(body.as_bytes()))
            .build();
        let response = Response::new(201, Vec::new(), Bytes::from_static(b"{\"id\":7}"));
        HttpResult::new(request, response, Duration::from_millis(3), None)
    }

    #[test]
    fn form_bodies_are_decoded() {
        let result = post_result("application/x-www-form-urlencoded", "name=Ann+Lee&city=Paris%20Nord");
        assert_eq!(request_body(&result), "name=Ann Lee&city=Paris Nord");
    }

    #[test]
    fn multipart_bodies_are_summarized() {
        let result = post_result("multipart/form-data; boundary=x", "--x--");
        assert_eq!(request_body(&result), "<multipart body of 5 bytes>");
    }

    #[test]
    fn raw_bodies_are_shown_as_text() {
        let result = post_result("text/plain", "raw-payload");
        assert_eq!(request_body(&result), "raw-payload");
    }

    #[test]
    fn json_is_pretty_printed() {
        assert_eq!(pretty_json(r#"{"id":7}"#), "{\n  \"id\": 7\n}");
        assert_eq!(pretty_json("plain"), "plain");
    }

    #[test]
    fn print_never_fails() {
        let result = post_result("application/json", r#"{"name":"Ann"}"#);
        assert!(print().handle(&result).is_ok());
    }

    #[test]
    fn closures_are_handlers() {
        let result = post_result("text/plain", "x");
        let handler = |result: &HttpResult| {
            assert_eq!(result.status(), 201);
            Ok::<_, crate::Error>(())
        };
        assert!(handler.handle(&result).is_ok());
    }
}
