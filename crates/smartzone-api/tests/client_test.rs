#![allow(clippy::unwrap_used)]
// Integration tests for `SmartZoneClient` using wiremock.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smartzone_api::{
    Credentials, DEFAULT_API_VERSION, Error, Resource, Session, SmartZoneClient, TransportConfig,
};

// ── Helpers ─────────────────────────────────────────────────────────

const SESSION_PATH: &str = "/wsg/api/public/v12_0/session";

async fn setup() -> (MockServer, SmartZoneClient) {
    let server = MockServer::start().await;
    let client =
        SmartZoneClient::new(&server.uri(), DEFAULT_API_VERSION, &TransportConfig::default())
            .unwrap();
    (server, client)
}

fn api_path(suffix: &str) -> String {
    format!("/wsg/api/public/v12_0/{suffix}")
}

fn credentials(password: &str) -> Credentials {
    Credentials::new("admin", SecretString::from(password.to_string()))
}

async fn mount_login(server: &MockServer, session_id: &str) {
    Mock::given(method("GET"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .and(body_json(json!({ "username": "admin", "password": "secret" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Set-Cookie", format!("JSESSIONID={session_id}; Path=/wsg"))
                .set_body_json(json!({ "controllerVersion": "6.1.2" })),
        )
        .mount(server)
        .await;
}

async fn login(server: &MockServer, client: &SmartZoneClient) -> Session {
    mount_login(server, "sess-42").await;
    client.authenticate(&credentials("secret")).await.unwrap()
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_login_extracts_session_cookie() {
    let (server, client) = setup().await;
    let session = login(&server, &client).await;

    let headers = session.headers().unwrap();
    assert_eq!(headers.get("cookie").unwrap(), "JSESSIONID=sess-42");
    assert_eq!(
        session.base_url().as_str(),
        format!("{}/wsg/api/public/v12_0/", server.uri())
    );
}

#[tokio::test]
async fn test_login_failure_is_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let result = client.authenticate(&credentials("wrong")).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_login_without_cookie_is_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(SESSION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = client
        .authenticate(&credentials("secret"))
        .await
        .unwrap_err();
    assert!(err.is_auth(), "got: {err:?}");
    assert!(err.to_string().contains("JSESSIONID"));
}

#[tokio::test]
async fn test_login_unreachable_endpoint() {
    let client = SmartZoneClient::new(
        "http://127.0.0.1:1",
        DEFAULT_API_VERSION,
        &TransportConfig::default(),
    )
    .unwrap();

    let err = client
        .authenticate(&credentials("secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Authentication { .. }), "got: {err:?}");
}

// ── Resource tests ──────────────────────────────────────────────────

#[tokio::test]
async fn test_list_fetch_sends_page_size_and_cookie() {
    let (server, client) = setup().await;
    let session = login(&server, &client).await;

    Mock::given(method("GET"))
        .and(path(api_path("system/inventory")))
        .and(query_param("listSize", "1000"))
        .and(header("cookie", "JSESSIONID=sess-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "list": [{ "zoneName": "HQ", "zoneId": "z1", "totalAPs": 12 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client
        .fetch(&session, &Resource::list("system/inventory"))
        .await
        .unwrap();

    assert_eq!(body["list"][0]["zoneName"], "HQ");
    assert_eq!(body["list"][0]["totalAPs"], 12);
}

#[tokio::test]
async fn test_query_fetch_posts_limit() {
    let (server, client) = setup().await;
    let session = login(&server, &client).await;

    Mock::given(method("POST"))
        .and(path(api_path("query/ap")))
        .and(body_json(json!({ "limit": 1000 })))
        .and(header("cookie", "JSESSIONID=sess-42"))
        .and(header("content-type", "application/json;charset=UTF-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [{ "deviceName": "ap-1", "apMac": "aa:bb:cc:dd:ee:ff" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = client
        .fetch(&session, &Resource::query("query/ap"))
        .await
        .unwrap();

    assert_eq!(body["list"][0]["deviceName"], "ap-1");
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let (server, client) = setup().await;
    let session = login(&server, &client).await;

    Mock::given(method("GET"))
        .and(path(api_path("domains")))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client
        .fetch(&session, &Resource::list("domains"))
        .await
        .unwrap_err();

    match err {
        Error::Status { status, path, body } => {
            assert_eq!(status, 500);
            assert_eq!(path, "domains");
            assert_eq!(body, "boom");
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_unauthorized_is_session_expired() {
    let (server, client) = setup().await;
    let session = login(&server, &client).await;

    Mock::given(method("GET"))
        .and(path(api_path("licenses")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client
        .fetch(&session, &Resource::list("licenses"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SessionExpired { .. }), "got: {err:?}");
}

#[tokio::test]
async fn test_fetch_malformed_json() {
    let (server, client) = setup().await;
    let session = login(&server, &client).await;

    Mock::given(method("GET"))
        .and(path(api_path("controller")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client
        .fetch(&session, &Resource::list("controller"))
        .await
        .unwrap_err();

    match err {
        Error::Deserialization { body, .. } => assert_eq!(body, "<html>not json</html>"),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
