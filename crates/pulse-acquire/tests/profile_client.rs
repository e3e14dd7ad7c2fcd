//! Integration tests for `ProfileClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made. The client is pointed at the mock via
//! `with_base_url`, with delays zeroed out.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pulse_acquire::{AcquireError, ProfileClient};
use pulse_core::AppConfig;

fn test_config() -> AppConfig {
    AppConfig {
        env: pulse_core::Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("valid addr"),
        log_level: "debug".to_string(),
        request_timeout_secs: 5,
        user_agent: "pulse-test/0.1".to_string(),
        fetch_delay_min_ms: 0,
        fetch_delay_max_ms: 0,
        dump_dir: None,
    }
}

fn test_client(server: &MockServer) -> ProfileClient {
    ProfileClient::new(&test_config())
        .expect("failed to build ProfileClient")
        .with_base_url(&server.uri())
}

// ---------------------------------------------------------------------------
// Instagram — API path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn instagram_api_body_with_user_is_returned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/web_profile_info/"))
        .and(query_param("username", "someuser"))
        .and(header("x-ig-app-id", "936619743392459"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "data": {"user": {"full_name": "Some User"}}
        })))
        .mount(&server)
        .await;

    let body = test_client(&server).fetch_instagram("someuser").await;
    let body = body.expect("expected a body from the API path");
    assert_eq!(body["data"]["user"]["full_name"], "Some User");
}

#[tokio::test]
async fn instagram_api_without_user_falls_back_to_web() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/web_profile_info/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"status": "fail"})))
        .mount(&server)
        .await;

    let html = concat!(
        r#"<html><script type="text/javascript">window._sharedData = "#,
        r#"{"graphql":{"user":{"full_name":"Web User"}}};</script></html>"#
    );
    Mock::given(method("GET"))
        .and(path("/someuser/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;

    let body = test_client(&server).fetch_instagram("someuser").await;
    let body = body.expect("expected a body from the web fallback");
    assert_eq!(body["graphql"]["user"]["full_name"], "Web User");
}

#[tokio::test]
async fn instagram_web_additional_data_payload_is_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/web_profile_info/"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let html = concat!(
        r#"<script>window.__additionalDataLoaded('profile', "#,
        r#"{"graphql":{"user":{"full_name":"Extra User"}}});</script>"#
    );
    Mock::given(method("GET"))
        .and(path("/someuser/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&server)
        .await;

    let body = test_client(&server).fetch_instagram("someuser").await;
    let body = body.expect("expected a body from the additional-data payload");
    assert_eq!(body["graphql"]["user"]["full_name"], "Extra User");
}

#[tokio::test]
async fn instagram_total_failure_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/web_profile_info/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ghost/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let body = test_client(&server).fetch_instagram("ghost").await;
    assert!(body.is_none(), "expected None when both paths fail");
}

#[tokio::test]
async fn instagram_web_page_without_embedded_json_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users/web_profile_info/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/someuser/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login wall</html>"))
        .mount(&server)
        .await;

    let body = test_client(&server).fetch_instagram("someuser").await;
    assert!(body.is_none());
}

// ---------------------------------------------------------------------------
// TikTok
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tiktok_page_is_fetched_with_at_prefix_stripped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/@dancer"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"uniqueId":"dancer"}"#))
        .mount(&server)
        .await;

    let html = test_client(&server)
        .fetch_tiktok("@dancer", false)
        .await
        .expect("expected page body");
    assert!(html.contains("uniqueId"));
}

#[tokio::test]
async fn tiktok_404_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/@ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_tiktok("ghost", false).await;
    assert!(
        matches!(result, Err(AcquireError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn tiktok_other_status_maps_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/@blocked"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_tiktok("blocked", false).await;
    assert!(
        matches!(result, Err(AcquireError::UnexpectedStatus { status: 403, .. })),
        "expected UnexpectedStatus(403), got: {result:?}"
    );
}

#[tokio::test]
async fn tiktok_by_id_keeps_identifier_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/@42424242"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let html = test_client(&server)
        .fetch_tiktok("42424242", true)
        .await
        .expect("expected page body");
    assert_eq!(html, "ok");
}
