//! End-to-end tests: declared endpoints, executed with `WebTemplate`
//! against a wiremock server, checked with the result pipeline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tongs::matchers::{content, json_path, status, xpath};
use tongs::transform::{self, json, xml};
use tongs::{
    Arg, Endpoint, Error, HttpRequest, JsonConverter, Operation, Param, RequestKind, StaticParam,
    WebTemplate, args,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, body_string_contains, header, header_regex, method, path, query_param},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Student {
    id: u64,
    name: String,
    grade: u32,
}

fn ann() -> Student {
    Student {
        id: 7,
        name: "Ann".to_string(),
        grade: 3,
    }
}

fn students(host: &str) -> Endpoint {
    Endpoint::builder("students")
        .host(host)
        .base_path("/api/")
        .param(StaticParam::header("X-Api-Key", "secret"))
        .operation(
            Operation::builder("find")
                .path("/students/${id}/")
                .get()
                .accept("application/json")
                .description("find a student")
                .param(Param::path("id"))
                .build()
                .expect("find"),
        )
        .operation(
            Operation::builder("search")
                .path("/students")
                .get()
                .param(Param::query("grade"))
                .param(Param::query("tag"))
                .param(Param::header("X-Trace"))
                .build()
                .expect("search"),
        )
        .operation(
            Operation::builder("create")
                .path("/students")
                .post()
                .content_type("application/json")
                .param(Param::raw_body().with_converter(JsonConverter))
                .build()
                .expect("create"),
        )
        .operation(
            Operation::builder("enroll")
                .path("/enrollments")
                .post()
                .param(Param::body("name"))
                .param(Param::body("grade"))
                .build()
                .expect("enroll"),
        )
        .operation(
            Operation::builder("upload")
                .path("/students/${id}/files")
                .post()
                .param(Param::path("id"))
                .param(Param::file("file"))
                .param(Param::body("comment"))
                .build()
                .expect("upload"),
        )
        .fallback("first", |endpoint: &Endpoint, _args: &[Arg]| {
            endpoint.call("find", &args![1])
        })
        .build()
        .expect("endpoint")
}

fn template() -> WebTemplate {
    WebTemplate::builder().build()
}

#[tokio::test]
async fn find_a_student_as_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/7"))
        .and(header("Accept", "application/json"))
        .and(header("X-Api-Key", "secret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ann()),
        )
        .mount(&mock_server)
        .await;

    let request = students(&mock_server.uri())
        .call("find", &args![7])
        .expect("request");

    let student: Student = template()
        .perform(request)
        .await
        .expect("perform")
        .and_expect(status().is_ok())
        .expect("status")
        .and_expect(content().content_type("application/json"))
        .expect("content type")
        .and_expect(json_path("$.name").value("Ann"))
        .expect("name")
        .and_expect(json_path("$.nickname").does_not_exist())
        .expect("no nickname")
        .and_transform(json().object())
        .expect("student");

    assert_eq!(student, ann());
}

#[tokio::test]
async fn search_fans_out_sequences_and_skips_nulls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students"))
        .and(query_param("tag", "math"))
        .and(query_param("tag", "art"))
        .and(header("X-Trace", "t-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([ann()])))
        .mount(&mock_server)
        .await;

    let request = students(&mock_server.uri())
        .call(
            "search",
            &[Arg::Null, Arg::seq(["math", "art"]), Arg::from("t-1")],
        )
        .expect("request");
    assert!(request.query_params().iter().all(|(name, _)| name != "grade"));

    let found: Vec<Student> = template()
        .perform(request)
        .await
        .expect("perform")
        .and_expect(json_path("$").array_size(1))
        .expect("one student")
        .and_expect(json_path("$[*].name").value(json!(["Ann"])))
        .expect("a wildcard reads as a list")
        .and_transform(json().list())
        .expect("students");

    assert_eq!(found, [ann()]);
}

#[tokio::test]
async fn create_sends_the_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/students"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"grade":3,"id":7,"name":"Ann"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":7}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = students(&mock_server.uri())
        .call("create", &[Arg::value(&ann())])
        .expect("request");
    assert_eq!(request.kind(), RequestKind::Simple);

    let id: u64 = template()
        .perform(request)
        .await
        .expect("perform")
        .and_expect(status().is(201))
        .expect("created")
        .and_expect(status().reason("Created"))
        .expect("reason")
        .and_transform(transform::json_path("$.id").object())
        .expect("id");

    assert_eq!(id, 7);
}

#[tokio::test]
async fn enroll_sends_a_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/enrollments"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("name=Ann+Lee&grade=3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = students(&mock_server.uri())
        .call("enroll", &args!["Ann Lee", 3])
        .expect("request");

    let result = template()
        .perform(request)
        .await
        .expect("perform")
        .and_expect(status().is_success())
        .expect("enrolled")
        .and_return();

    assert_eq!(result.status(), 204);
}

#[tokio::test]
async fn upload_sends_multipart_files() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("temp dir");
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");
    std::fs::write(&first, "first file").expect("write a");
    std::fs::write(&second, "second file").expect("write b");

    Mock::given(method("POST"))
        .and(path("/api/students/7/files"))
        .and(header_regex("Content-Type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="file"; filename="a.txt""#))
        .and(body_string_contains(r#"name="file"; filename="b.txt""#))
        .and(body_string_contains("second file"))
        .and(body_string_contains(r#"name="comment""#))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let files = format!("{}, {}", first.display(), second.display());
    let request = students(&mock_server.uri())
        .call("upload", &args![7, files, "term report"])
        .expect("request");
    assert_eq!(request.kind(), RequestKind::Multipart);

    let result = template()
        .perform(request)
        .await
        .expect("perform")
        .and_expect(status().is_ok())
        .expect("uploaded")
        .and_return();

    let content_type = result.request().header("content-type").unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
}

#[tokio::test]
async fn fallback_operations_delegate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "Bob", "grade": 4})))
        .mount(&mock_server)
        .await;

    let request = students(&mock_server.uri())
        .call("first", &[])
        .expect("request");

    let result = template()
        .perform(request)
        .await
        .expect("perform")
        .and_return();

    assert_eq!(result.description(), Some("find a student"));
    assert!(result.response_string_content().contains("Bob"));
}

#[tokio::test]
async fn host_from_properties() {
    let mock_server = MockServer::start().await;
    let address = mock_server.address();
    let dir = tempfile::tempdir().expect("temp dir");
    let location = dir.path().join("http.properties");
    std::fs::write(
        &location,
        format!("http.host={}\nhttp.port={}\n", address.ip(), address.port()),
    )
    .expect("write properties");

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("up"))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::builder("health")
        .host_from(&location)
        .operation(
            Operation::builder("check")
                .path("health")
                .get()
                .build()
                .expect("operation"),
        )
        .build()
        .expect("endpoint");

    let result = template()
        .perform(endpoint.call("check", &[]).expect("request"))
        .await
        .expect("perform")
        .and_expect(content().string("up"))
        .expect("up")
        .and_return();

    assert_eq!(
        result.request().url().as_str(),
        format!("{}/health", mock_server.uri())
    );
}

#[tokio::test]
async fn global_expectations_fail_fast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let template = WebTemplate::builder()
        .always_expect(status().is_success())
        .build();

    let err = template
        .perform(HttpRequest::get(format!("{}/anything", mock_server.uri())))
        .await
        .expect_err("unavailable");

    match err {
        Error::Assertion { label, actual, .. } => {
            assert_eq!(label, "Status");
            assert_eq!(actual, "503");
        }
        other => panic!("expected an assertion failure, got {other}"),
    }
}

#[tokio::test]
async fn hand_built_requests_with_cookies() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/grades/42"))
        .and(header("Cookie", "session=abc; theme=dark"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<grades><math>3</math><art>4</art></grades>", "application/xml"),
        )
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(format!("{}/grades/${{id}}", mock_server.uri()))
        .path("id", "42")
        .cookie("session", "abc")
        .cookie("theme", "dark");

    let grades: HashMap<String, u32> = template()
        .perform(request)
        .await
        .expect("perform")
        .and_expect(content().content_type("application/xml"))
        .expect("content type")
        .and_expect(xpath("/grades/math").value("3"))
        .expect("math")
        .and_transform(xml().map())
        .expect("grades");

    assert_eq!(grades.get("art"), Some(&4));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn perform_blocking_from_a_plain_thread() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let url = format!("{}/ping", mock_server.uri());
    let bodies = std::thread::spawn(move || {
        let template = template();
        (0..2)
            .map(|_| {
                template
                    .perform_blocking(HttpRequest::get(url.as_str()))
                    .expect("perform")
                    .and_return()
                    .response_string_content()
                    .to_string()
            })
            .collect::<Vec<_>>()
    })
    .join()
    .expect("thread");

    assert_eq!(bodies, ["pong", "pong"]);
}
