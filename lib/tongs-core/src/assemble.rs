//! Request assembly.
//!
//! Both request variants go through the same build sequence: path,
//! query, headers, content type, accept, body, files, then a
//! variant-specific post-processing step. The variant is chosen once,
//! from the presence of file bindings.

use tracing::{debug, warn};

use crate::{
    Bindings, ClassifiedParams, ContentType, HttpRequest, RequestBody, RequestDescriptor,
    RequestKind, Result, SimpleBody, header,
};

/// Separator between several file paths bound to one value.
pub const FILE_SEPARATOR: char = ',';

/// Multipart if and only if at least one file binding exists.
#[must_use]
pub fn select_variant(params: &ClassifiedParams) -> RequestKind {
    if params.file.is_empty() {
        RequestKind::Simple
    } else {
        RequestKind::Multipart
    }
}

/// Build the request described by `descriptor`.
pub fn assemble(descriptor: RequestDescriptor) -> Result<HttpRequest> {
    let variant = select_variant(&descriptor.params);
    let RequestDescriptor {
        url,
        method,
        content_type,
        accept,
        description,
        params,
    } = descriptor;
    debug!(%method, %url, ?variant, "assembling request");

    let request = HttpRequest::of_kind(variant, method, url).description(description);
    let request = populate_path(request, &params.path);
    let request = populate_query(request, &params.query);
    let request = populate_headers(request, &params.header);
    let request = populate_content_type(variant, request, content_type.as_deref());
    let request = populate_accept(request, accept.as_deref());
    let request = populate_body(variant, request, &params.body);
    let request = populate_files(variant, request, &params.file)?;
    Ok(post_process(variant, request))
}

fn populate_path(request: HttpRequest, path: &Bindings) -> HttpRequest {
    path.names().into_iter().fold(request, |request, name| {
        match path.get(name) {
            Some(value) => request.path(name, value),
            None => request,
        }
    })
}

fn populate_query(request: HttpRequest, query: &Bindings) -> HttpRequest {
    query
        .iter()
        .fold(request, |request, (name, value)| request.query(name, value))
}

fn populate_headers(request: HttpRequest, headers: &Bindings) -> HttpRequest {
    headers
        .iter()
        .fold(request, |request, (name, value)| request.header(name, value))
}

fn populate_content_type(
    variant: RequestKind,
    request: HttpRequest,
    content_type: Option<&str>,
) -> HttpRequest {
    match (variant, content_type) {
        (RequestKind::Simple, Some(content_type)) => request.content_type(content_type),
        (RequestKind::Multipart, Some(content_type)) => {
            debug!(content_type, "multipart requests use the multipart content type");
            request
        }
        (_, None) => request,
    }
}

fn populate_accept(request: HttpRequest, accept: Option<&str>) -> HttpRequest {
    match accept {
        Some(accept) => request.accept(accept),
        None => request,
    }
}

fn populate_body(variant: RequestKind, request: HttpRequest, body: &Bindings) -> HttpRequest {
    match variant {
        RequestKind::Simple => match body.get("") {
            Some(raw) => {
                let dropped: Vec<&str> = body
                    .names()
                    .into_iter()
                    .filter(|name| !name.is_empty())
                    .collect();
                if !dropped.is_empty() {
                    warn!(?dropped, "raw body binding wins, dropping keyed body fields");
                }
                request.body_param("", raw)
            }
            None => body
                .iter()
                .fold(request, |request, (name, value)| request.body_param(name, value)),
        },
        RequestKind::Multipart => body
            .iter()
            .fold(request, |request, (name, value)| request.body_param(name, value)),
    }
}

fn populate_files(
    variant: RequestKind,
    mut request: HttpRequest,
    files: &Bindings,
) -> Result<HttpRequest> {
    if variant == RequestKind::Simple {
        return Ok(request);
    }
    for (name, value) in files.iter() {
        for path in value
            .split(FILE_SEPARATOR)
            .map(str::trim)
            .filter(|path| !path.is_empty())
        {
            request = request.file(name, path)?;
        }
    }
    Ok(request)
}

fn post_process(variant: RequestKind, request: HttpRequest) -> HttpRequest {
    match variant {
        RequestKind::Simple => {
            let is_form = matches!(request.body(), RequestBody::Simple(SimpleBody::Form(_)));
            let has_content_type = request
                .header_value(header::CONTENT_TYPE.as_str())
                .is_some();
            if is_form && !has_content_type {
                request.content_type(ContentType::FormUrlEncoded.as_str())
            } else {
                request
            }
        }
        RequestKind::Multipart => {
            if let RequestBody::Multipart(body) = request.body() {
                debug!(
                    fields = body.fields().len(),
                    files = body.files().len(),
                    "multipart body ready"
                );
            }
            request
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use assert2::{check, let_assert};
    use bytes::Bytes;

    use super::*;
    use crate::Method;

    fn descriptor(params: ClassifiedParams) -> RequestDescriptor {
        RequestDescriptor {
            url: "http://localhost:8080/v1/grades/${id}".to_string(),
            method: Method::Post,
            content_type: None,
            accept: None,
            description: "grades".to_string(),
            params,
        }
    }

    #[test]
    fn path_binding_resolves_placeholder() {
        let mut params = ClassifiedParams::default();
        params.path.insert("id", "42");
        params.path.insert("id", "43");

        let request = assemble(descriptor(params)).expect("assembled");
        check!(request.url() == "http://localhost:8080/v1/grades/42");
        check!(!request.url().contains("${id}"));
    }

    #[test]
    fn raw_body_is_sent_verbatim() {
        let mut params = ClassifiedParams::default();
        params.body.insert("", "raw-payload");

        let request = assemble(descriptor(params)).expect("assembled");
        check!(request.body() == &RequestBody::Simple(SimpleBody::Raw(Bytes::from("raw-payload"))));
        check!(request.header_value("content-type").is_none());
    }

    #[test]
    fn raw_body_drops_keyed_fields() {
        let mut params = ClassifiedParams::default();
        params.body.insert("name", "alice");
        params.body.insert("", "raw-payload");

        let request = assemble(descriptor(params)).expect("assembled");
        check!(request.body() == &RequestBody::Simple(SimpleBody::Raw(Bytes::from("raw-payload"))));
    }

    #[test]
    fn keyed_fields_form_body() {
        let mut params = ClassifiedParams::default();
        params.body.insert("name", "alice");
        params.body.insert("tag", "a");
        params.body.insert("tag", "b");

        let request = assemble(descriptor(params)).expect("assembled");
        let_assert!(RequestBody::Simple(SimpleBody::Form(fields)) = request.body());
        check!(fields.len() == 3);
        check!(request.header_value("content-type") == Some("application/x-www-form-urlencoded"));
    }

    #[test]
    fn declared_content_type_and_accept() {
        let mut descriptor = descriptor(ClassifiedParams::default());
        descriptor.content_type = Some("application/json".to_string());
        descriptor.accept = Some("application/xml".to_string());

        let request = assemble(descriptor).expect("assembled");
        check!(request.header_value("Content-Type") == Some("application/json"));
        check!(request.header_value("Accept") == Some("application/xml"));
    }

    #[test]
    fn file_bindings_select_multipart() {
        let mut params = ClassifiedParams::default();
        params.body.insert("title", "report");
        params.file.insert("file", "/a.txt,/b.txt");
        params.file.insert("file", "");
        params.file.insert("file", "/c.txt");

        let request = assemble(descriptor(params)).expect("assembled");
        check!(request.kind() == RequestKind::Multipart);
        let_assert!(RequestBody::Multipart(body) = request.body());
        check!(body.fields() == [("title".to_string(), "report".to_string())]);
        check!(
            body.files()
                == [
                    ("file".to_string(), PathBuf::from("/a.txt")),
                    ("file".to_string(), PathBuf::from("/b.txt")),
                    ("file".to_string(), PathBuf::from("/c.txt")),
                ]
        );
    }

    #[test]
    fn no_file_binding_selects_simple() {
        let mut params = ClassifiedParams::default();
        params.body.insert("title", "report");
        check!(select_variant(&params) == RequestKind::Simple);

        params.file.insert("file", "/a.txt");
        check!(select_variant(&params) == RequestKind::Multipart);
    }

    #[test]
    fn query_and_headers_keep_every_value() {
        let mut params = ClassifiedParams::default();
        params.query.insert("tag", "a");
        params.query.insert("tag", "b");
        params.header.insert("X-Id", "1");

        let request = assemble(descriptor(params)).expect("assembled");
        check!(
            request.query_params()
                == [
                    ("tag".to_string(), "a".to_string()),
                    ("tag".to_string(), "b".to_string())
                ]
        );
        check!(request.header_value("x-id") == Some("1"));
        check!(request.description_text() == Some("grades"));
    }
}
