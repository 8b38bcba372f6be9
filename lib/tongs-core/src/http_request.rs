//! The buildable request.
//!
//! [`HttpRequest`] is the in-memory request under construction, returned
//! by [`Endpoint::call`](crate::Endpoint::call) or built by hand. Its
//! variant, simple or multipart, is fixed when it is created.
//!
//! # Example
//!
//! ```
//! use tongs_core::HttpRequest;
//!
//! # fn main() -> tongs_core::Result<()> {
//! let request = HttpRequest::post("http://localhost:8080/users/${id}")
//!     .path("id", "42")
//!     .query("notify", "true")
//!     .body_param("name", "alice")
//!     .build()?;
//!
//! assert_eq!(request.url().as_str(), "http://localhost:8080/users/42?notify=true");
//! assert_eq!(request.body().map(|body| body.as_ref()), Some(&b"name=alice"[..]));
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use bytes::Bytes;
use tracing::warn;

use crate::{
    ContentType, Error, Form, Method, Part, Request, Result, UrlTemplate, header, to_form,
};

/// The two request construction variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Query string, headers and a form-encoded or raw body.
    Simple,
    /// Text fields and file attachments in a `multipart/form-data` body.
    Multipart,
}

/// Body of a simple request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SimpleBody {
    /// No body.
    #[default]
    Empty,
    /// A raw payload sent as-is.
    Raw(Bytes),
    /// Form fields, URL-encoded when built.
    Form(Vec<(String, String)>),
}

/// Body of a multipart request; files are read when the request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    fields: Vec<(String, String)>,
    files: Vec<(String, PathBuf)>,
}

impl MultipartBody {
    /// Text fields, in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// File attachments, in insertion order.
    #[must_use]
    pub fn files(&self) -> &[(String, PathBuf)] {
        &self.files
    }

    fn into_form(self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.part(Part::field(name, value));
        }
        for (name, path) in self.files {
            form = form.part(Part::from_path(name, path)?);
        }
        Ok(form)
    }
}

/// A request body under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Simple variant body.
    Simple(SimpleBody),
    /// Multipart variant body.
    Multipart(MultipartBody),
}

/// A request under construction.
#[derive(Debug, Clone)]
#[must_use]
pub struct HttpRequest {
    method: Method,
    url: UrlTemplate,
    description: Option<String>,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    cookies: Vec<(String, String)>,
    body: RequestBody,
}

impl HttpRequest {
    /// A simple request.
    pub fn request(method: Method, url: impl Into<String>) -> Self {
        Self::with_body(method, url, RequestBody::Simple(SimpleBody::Empty))
    }

    /// A multipart request.
    pub fn multipart(method: Method, url: impl Into<String>) -> Self {
        Self::with_body(method, url, RequestBody::Multipart(MultipartBody::default()))
    }

    /// A request of the given kind.
    pub fn of_kind(kind: RequestKind, method: Method, url: impl Into<String>) -> Self {
        match kind {
            RequestKind::Simple => Self::request(method, url),
            RequestKind::Multipart => Self::multipart(method, url),
        }
    }

    fn with_body(method: Method, url: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method,
            url: UrlTemplate::new(url),
            description: None,
            headers: Vec::new(),
            query: Vec::new(),
            cookies: Vec::new(),
            body,
        }
    }

    /// A simple GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::request(Method::Get, url)
    }

    /// A simple POST request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::request(Method::Post, url)
    }

    /// A simple PUT request.
    pub fn put(url: impl Into<String>) -> Self {
        Self::request(Method::Put, url)
    }

    /// A simple DELETE request.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::request(Method::Delete, url)
    }

    /// A simple PATCH request.
    pub fn patch(url: impl Into<String>) -> Self {
        Self::request(Method::Patch, url)
    }

    /// A simple OPTIONS request.
    pub fn options(url: impl Into<String>) -> Self {
        Self::request(Method::Options, url)
    }

    /// A simple HEAD request.
    pub fn head(url: impl Into<String>) -> Self {
        Self::request(Method::Head, url)
    }

    /// A simple TRACE request.
    pub fn trace(url: impl Into<String>) -> Self {
        Self::request(Method::Trace, url)
    }

    // ------------------------------------------------------------------------
    // Universal builder steps
    // ------------------------------------------------------------------------

    /// Replace `${name}` placeholders of the URL with `value`.
    pub fn path(mut self, name: &str, value: &str) -> Self {
        self.url.substitute(name, value);
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the `Content-Type` header, replacing a previous one.
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.set_header(header::CONTENT_TYPE.as_str(), content_type)
    }

    /// Set the `Accept` header, replacing a previous one.
    pub fn accept(self, accept: impl Into<String>) -> Self {
        self.set_header(header::ACCEPT.as_str(), accept)
    }

    fn set_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Append a cookie, sent in a single `Cookie` header.
    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }

    /// Add a body parameter.
    ///
    /// On a simple request, the empty name sets the raw body and other
    /// names append form fields. A raw body always wins over form fields.
    /// On a multipart request, every name appends a text field.
    pub fn body_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match &mut self.body {
            RequestBody::Simple(body) if name.is_empty() => set_raw(body, Bytes::from(value)),
            RequestBody::Simple(body @ SimpleBody::Empty) => {
                *body = SimpleBody::Form(vec![(name, value)]);
            }
            RequestBody::Simple(SimpleBody::Form(fields)) => fields.push((name, value)),
            RequestBody::Simple(SimpleBody::Raw(_)) => {
                warn!(field = %name, "raw body already set, dropping form field");
            }
            RequestBody::Multipart(body) => body.fields.push((name, value)),
        }
        self
    }

    /// Set the description reported with the result.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // ------------------------------------------------------------------------
    // Variant-specific builder steps
    // ------------------------------------------------------------------------

    /// Set the raw body of a simple request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] on a multipart request.
    pub fn raw_body(mut self, body: impl Into<Bytes>) -> Result<Self> {
        match &mut self.body {
            RequestBody::Simple(simple) => {
                set_raw(simple, body.into());
                Ok(self)
            }
            RequestBody::Multipart(_) => Err(Error::invalid_request(
                "a raw body cannot be set on a multipart request",
            )),
        }
    }

    /// Attach a file to a multipart request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] on a simple request.
    pub fn file(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self> {
        match &mut self.body {
            RequestBody::Multipart(multipart) => {
                multipart.files.push((name.into(), path.into()));
                Ok(self)
            }
            RequestBody::Simple(_) => Err(Error::invalid_request(
                "files can only be attached to a multipart request",
            )),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// The URL template in its current state.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// The description, if any.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The request variant.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        match self.body {
            RequestBody::Simple(_) => RequestKind::Simple,
            RequestBody::Multipart(_) => RequestKind::Multipart,
        }
    }

    /// Headers, in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header value by name, ignoring case.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Query parameters, in insertion order.
    #[must_use]
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }

    /// Cookies, in insertion order.
    #[must_use]
    pub fn cookies(&self) -> &[(String, String)] {
        &self.cookies
    }

    /// The body under construction.
    #[must_use]
    pub const fn body(&self) -> &RequestBody {
        &self.body
    }

    // ------------------------------------------------------------------------
    // Build
    // ------------------------------------------------------------------------

    /// Produce the transport request.
    ///
    /// Multipart attachments are read from disk here.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, form encoding fails or an
    /// attachment cannot be read.
    pub fn build(self) -> Result<Request<Bytes>> {
        let kind = self.kind();
        let unresolved = self.url.placeholders();
        if !unresolved.is_empty() {
            warn!(url = %self.url, ?unresolved, "URL template has unresolved placeholders");
        }
        let url = url::Url::parse(self.url.as_str())?;

        let mut headers = self.headers;
        if kind == RequestKind::Multipart {
            headers.retain(|(key, _)| !key.eq_ignore_ascii_case(header::CONTENT_TYPE.as_str()));
        }
        let mut builder = Request::builder(self.method, url)
            .query_pairs(self.query)
            .headers(headers);

        if !self.cookies.is_empty() {
            let cookie = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(header::COOKIE.as_str(), cookie);
        }

        let builder = match self.body {
            RequestBody::Simple(SimpleBody::Empty) => builder,
            RequestBody::Simple(SimpleBody::Raw(bytes)) => builder.body(bytes),
            RequestBody::Simple(SimpleBody::Form(fields)) => {
                let builder = if builder.has_header(header::CONTENT_TYPE.as_str()) {
                    builder
                } else {
                    builder.header(
                        header::CONTENT_TYPE.as_str(),
                        ContentType::FormUrlEncoded.as_str(),
                    )
                };
                builder.body(to_form(&fields)?)
            }
            RequestBody::Multipart(multipart) => {
                let (content_type, body) = multipart.into_form()?.into_body();
                builder
                    .header(header::CONTENT_TYPE.as_str(), content_type)
                    .body(body)
            }
        };

        Ok(builder.build())
    }
}

fn set_raw(body: &mut SimpleBody, raw: Bytes) {
    if let SimpleBody::Form(fields) = body {
        warn!(dropped = fields.len(), "raw body replaces form fields");
    }
    *body = SimpleBody::Raw(raw);
}
