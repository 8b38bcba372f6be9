//! Integration tests for `HyperClient` using wiremock.

use std::time::Duration;

use bytes::Bytes;
use tongs::middleware::LoggingLayer;
use tongs::{CookiePolicy, HttpClient, HyperClient, Method, Request};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, header, method, path, query_param},
};

fn url(server: &MockServer, path: &str) -> url::Url {
    url::Url::parse(&format!("{}{path}", server.uri())).expect("url")
}

#[tokio::test]
async fn test_get_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/students/1"))
        .and(header("Accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"id":1,"name":"Ann"}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = Request::builder(Method::Get, url(&mock_server, "/students/1"))
        .header("Accept", "application/json")
        .build();

    let response = client.execute(request).await.expect("response");

    assert!(response.is_success());
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(response.text(), r#"{"id":1,"name":"Ann"}"#);
}

#[tokio::test]
async fn test_post_with_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/grades"))
        .and(body_string("raw-payload"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = Request::builder(Method::Post, url(&mock_server, "/grades"))
        .body(Bytes::from_static(b"raw-payload"))
        .build();

    let response = client.execute(request).await.expect("response");
    assert_eq!(response.status(), 201);
    assert_eq!(response.reason(), Some("Created"));
}

#[tokio::test]
async fn test_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/students"))
        .and(query_param("grade", "3"))
        .and(query_param("city", "Paris Nord"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = Request::builder(Method::Get, url(&mock_server, "/students"))
        .query("grade", "3")
        .query("city", "Paris Nord")
        .build();

    let response = client.execute(request).await.expect("response");
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_error_statuses_are_responses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&mock_server)
        .await;

    let client = HyperClient::new();
    let request = Request::builder(Method::Delete, url(&mock_server, "/students/9")).build();

    let response = client.execute(request).await.expect("response");
    assert!(response.is_client_error());
    assert_eq!(response.text(), "missing");
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let request = Request::builder(Method::Get, url(&mock_server, "/slow")).build();

    let err = client.execute(request).await.expect_err("timeout");
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_connection_refused() {
    let client = HyperClient::builder()
        .connect_timeout(Duration::from_secs(1))
        .build();
    let url = url::Url::parse("http://127.0.0.1:1/").expect("url");
    let request = Request::builder(Method::Get, url).build();

    let err = client.execute(request).await.expect_err("refused");
    assert!(err.is_connection());
}

#[tokio::test]
async fn test_logging_layer_is_transparent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/students/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HyperClient::builder()
        .layer(LoggingLayer::debug())
        .build();
    let request = Request::builder(Method::Put, url(&mock_server, "/students/1"))
        .header("Content-Type", "application/json")
        .body(Bytes::from_static(br#"{"name":"Ann"}"#))
        .build();

    let response = client.execute(request).await.expect("response");
    assert_eq!(response.status(), 204);
}

async fn session_server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(204).insert_header("Set-Cookie", "session=abc; Path=/; HttpOnly"),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Ann"))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_cookies_are_replayed_by_default() {
    let mock_server = session_server().await;
    let client = HyperClient::new();

    client
        .execute(Request::builder(Method::Post, url(&mock_server, "/login")).build())
        .await
        .expect("login");
    let response = client
        .execute(Request::builder(Method::Get, url(&mock_server, "/me")).build())
        .await
        .expect("me");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "Ann");
}

#[tokio::test]
async fn test_cookies_can_be_ignored() {
    let mock_server = session_server().await;
    let client = HyperClient::builder()
        .cookies(CookiePolicy::Ignore)
        .build();

    client
        .execute(Request::builder(Method::Post, url(&mock_server, "/login")).build())
        .await
        .expect("login");
    let response = client
        .execute(Request::builder(Method::Get, url(&mock_server, "/me")).build())
        .await
        .expect("me");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_reason_phrase_sent_by_the_server() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let address = listener.local_addr().expect("address");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buffer = [0_u8; 1024];
        let _ = socket.read(&mut buffer).await.expect("read request");
        socket
            .write_all(b"HTTP/1.1 200 All Good\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok")
            .await
            .expect("write response");
    });

    let url = url::Url::parse(&format!("http://{address}/")).expect("url");
    let response = HyperClient::new()
        .execute(Request::builder(Method::Get, url).build())
        .await
        .expect("response");

    assert_eq!(response.status(), 200);
    assert_eq!(response.reason(), Some("All Good"));
    assert_eq!(response.text(), "ok");
}
